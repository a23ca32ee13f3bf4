/// Main application structure and lifecycle management
use crate::config::Config;
use crate::form::Form;

/// Идентификатор поля ввода: по нему фокус и прямоугольник виджета ищутся между кадрами
pub fn entry_id() -> egui::Id {
    egui::Id::new("form_entry")
}

pub struct FormApp {
    pub config: Config,
    pub form: Form,
}

impl FormApp {
    pub fn new(config: Config) -> Self {
        let form = Form::new(&config);
        Self { config, form }
    }

    /// Один кадр: обработка закрытия, затем метка, поле ввода и кнопка
    pub fn show(&mut self, ctx: &egui::Context) {
        // Окно закрывает сам рантайм, здесь только фиксируем переход состояния
        if ctx.input(|i| i.viewport().close_requested()) && self.form.request_close() {
            log::info!("🛑 Окно закрыто, цикл событий завершается");
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = self.config.spacing;

            ui.vertical_centered_justified(|ui| {
                ui.label(self.form.label().text());

                let placeholder = self.form.entry().placeholder().to_string();
                ui.add(
                    egui::TextEdit::singleline(self.form.entry_mut().text_mut())
                        .id(entry_id())
                        .hint_text(placeholder),
                );

                let button_text = self.form.button().text().to_string();
                if ui.button(button_text).clicked() {
                    self.form.click();
                }
            });
        });
    }
}

impl eframe::App for FormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Lifecycle;

    fn input(events: Vec<egui::Event>) -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(300.0, 200.0),
            )),
            events,
            ..Default::default()
        }
    }

    fn run_frame(app: &mut FormApp, ctx: &egui::Context, events: Vec<egui::Event>) {
        let _ = ctx.run(input(events), |ctx| app.show(ctx));
    }

    fn pointer_button(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    /// Наведение, нажатие и отпускание в отдельных кадрах, как у настоящей мыши
    fn click_at(app: &mut FormApp, ctx: &egui::Context, pos: egui::Pos2) {
        run_frame(app, ctx, vec![egui::Event::PointerMoved(pos)]);
        run_frame(app, ctx, vec![pointer_button(pos, true)]);
        run_frame(app, ctx, vec![pointer_button(pos, false)]);
        run_frame(app, ctx, vec![egui::Event::PointerGone]);
    }

    fn entry_rect(ctx: &egui::Context) -> egui::Rect {
        ctx.read_response(entry_id())
            .map(|response| response.rect)
            .expect("поле ввода должно быть отрисовано")
    }

    /// Кнопка идёт сразу под полем ввода на ширину колонки, не ниже interact_size
    fn button_pos(app: &FormApp, ctx: &egui::Context) -> egui::Pos2 {
        let entry = entry_rect(ctx);
        egui::pos2(entry.center().x, entry.bottom() + app.config.spacing + 9.0)
    }

    fn started() -> (FormApp, egui::Context) {
        let mut app = FormApp::new(Config::default());
        let ctx = egui::Context::default();
        run_frame(&mut app, &ctx, Vec::new());
        (app, ctx)
    }

    #[test]
    fn rendering_keeps_initial_label() {
        let (mut app, ctx) = started();
        *app.form.entry_mut().text_mut() = "typed but not clicked".to_string();

        for _ in 0..3 {
            run_frame(&mut app, &ctx, Vec::new());
        }

        assert_eq!(app.form.label().text(), "Hello, GTK+!");
        assert_eq!(app.form.entry().text(), "typed but not clicked");
        assert!(app.form.is_running());
    }

    #[test]
    fn close_request_terminates_form() {
        let (mut app, ctx) = started();
        assert_eq!(app.form.lifecycle(), Lifecycle::Running);

        let mut close = input(Vec::new());
        close.viewports.insert(
            egui::ViewportId::ROOT,
            egui::ViewportInfo {
                events: vec![egui::ViewportEvent::Close],
                ..Default::default()
            },
        );
        let _ = ctx.run(close.clone(), |ctx| app.show(ctx));
        assert_eq!(app.form.lifecycle(), Lifecycle::Terminated);

        // Повторный запрос ничего не меняет
        let _ = ctx.run(close, |ctx| app.show(ctx));
        assert!(!app.form.request_close());
        assert_eq!(app.form.lifecycle(), Lifecycle::Terminated);
    }

    #[test]
    fn clicking_button_without_typing_clears_label() {
        let (mut app, ctx) = started();

        let pos = button_pos(&app, &ctx);
        click_at(&mut app, &ctx, pos);

        assert_eq!(app.form.entry().text(), "");
        assert_eq!(app.form.label().text(), "");
    }

    #[test]
    fn typed_text_reaches_label_on_button_click() {
        let (mut app, ctx) = started();

        let entry = entry_rect(&ctx).center();
        click_at(&mut app, &ctx, entry);
        assert!(ctx.memory(|m| m.has_focus(entry_id())));

        run_frame(&mut app, &ctx, vec![egui::Event::Text("abc".to_string())]);
        assert_eq!(app.form.entry().text(), "abc");
        assert_eq!(app.form.label().text(), "Hello, GTK+!");

        let pos = button_pos(&app, &ctx);
        click_at(&mut app, &ctx, pos);

        assert_eq!(app.form.label().text(), "abc");
    }
}
