/// Параметры окна и виджетов формы
#[derive(Debug, Clone)]
pub struct Config {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub spacing: f32,
    pub initial_label: String,
    pub entry_placeholder: String,
    pub button_text: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: "GTK+ Text Entry Example".to_string(),
            window_width: 300.0,
            window_height: 200.0,
            // Отступ между виджетами в вертикальном контейнере
            spacing: 5.0,
            initial_label: "Hello, GTK+!".to_string(),
            entry_placeholder: "Type something...".to_string(),
            button_text: "Click me".to_string(),
        }
    }
}

impl Config {
    /// Корневое окно: заголовок и размер по умолчанию, остальное на усмотрение рантайма
    pub fn viewport(&self) -> egui::ViewportBuilder {
        egui::ViewportBuilder::default()
            .with_title(self.window_title.clone())
            .with_inner_size([self.window_width, self.window_height])
    }
}
