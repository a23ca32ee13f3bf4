// Модули приложения
mod config;
mod form;
mod logger;
mod ui;

use config::Config;
use eframe::NativeOptions;
use ui::FormApp;

fn main() -> Result<(), eframe::Error> {
    // .env может задавать RUST_LOG
    dotenv::dotenv().ok();
    logger::init();
    log::info!("🚀 Форма запущена");

    let config = Config::default();
    log::info!("📁 Конфигурация загружена");
    let title = config.window_title.clone();

    let options = NativeOptions {
        viewport: config.viewport(),
        ..Default::default()
    };

    // Аргументы командной строки не разбираются
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(Box::new(FormApp::new(config)))
        }),
    )?;

    log::info!("👋 Цикл событий завершён");
    Ok(())
}
