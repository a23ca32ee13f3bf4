pub mod app;

pub use app::FormApp;
