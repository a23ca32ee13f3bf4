/// Модуль для инициализации логирования
/// Пишет в stderr: форма ничего не сохраняет на диск, в том числе логи

use std::io::Write;
use log::LevelFilter;

pub fn init() {
    let mut builder = env_logger::Builder::new();

    // Читаем RUST_LOG переменную если она установлена
    if let Ok(log_level) = std::env::var("RUST_LOG") {
        builder.parse_filters(&log_level);
    } else {
        builder.filter_level(LevelFilter::Info);
        // Логи рантайма слишком многословны
        for module in ["eframe", "egui", "egui_glow", "egui_winit", "winit", "wgpu"] {
            builder.filter_module(module, LevelFilter::Warn);
        }
    }

    // Формат логов: [HH:MM:SS LEVEL] модуль - сообщение
    builder.format(|buf, record| {
        let now = chrono::Local::now().format("%H:%M:%S");
        writeln!(
            buf,
            "[{} {}] {} - {}",
            now,
            record.level(),
            record.target(),
            record.args()
        )
    });

    builder.target(env_logger::Target::Stderr).init();

    log::debug!("Логирование инициализировано ✓");
}
