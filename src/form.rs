/// Модель формы: метка, поле ввода, кнопка и их обработчики
use crate::config::Config;

/// Текст над полем ввода, меняется только обработчиком клика
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    text: String,
}

impl Label {
    pub fn new(initial: &str) -> Self {
        Self {
            text: initial.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }
}

/// Однострочное поле ввода. Подсказка (placeholder) не входит в содержимое
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    text: String,
    placeholder: String,
}

impl Entry {
    pub fn new(placeholder: &str) -> Self {
        Self {
            text: String::new(),
            placeholder: placeholder.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Буфер, в который TextEdit пишет нажатия клавиш
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn snapshot(&self) -> String {
        self.text().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    text: String,
}

impl Button {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Виджеты, которые может трогать обработчик клика
pub struct ClickTargets<'a> {
    pub entry: &'a Entry,
    pub label: &'a mut Label,
}

/// Копирует текущее содержимое поля ввода в метку
pub fn on_click(targets: ClickTargets<'_>) {
    let snapshot = targets.entry.snapshot();
    targets.label.set_text(&snapshot);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Running,
    Terminated,
}

/// Виджеты окна вместе с состоянием жизненного цикла
#[derive(Debug, Clone)]
pub struct Form {
    label: Label,
    entry: Entry,
    button: Button,
    lifecycle: Lifecycle,
}

impl Form {
    pub fn new(config: &Config) -> Self {
        Self {
            label: Label::new(&config.initial_label),
            entry: Entry::new(&config.entry_placeholder),
            button: Button::new(&config.button_text),
            lifecycle: Lifecycle::Running,
        }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn entry_mut(&mut self) -> &mut Entry {
        &mut self.entry
    }

    pub fn button(&self) -> &Button {
        &self.button
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle() == Lifecycle::Running
    }

    pub fn click_targets(&mut self) -> ClickTargets<'_> {
        ClickTargets {
            entry: &self.entry,
            label: &mut self.label,
        }
    }

    /// Клик по кнопке. После закрытия окна игнорируется
    pub fn click(&mut self) {
        if !self.is_running() {
            return;
        }
        on_click(self.click_targets());
        log::debug!("🖱️ Клик: метка обновлена ({} байт)", self.label.text().len());
    }

    /// Запрос на закрытие окна.
    ///
    /// Возвращает `true` только для запроса, который действительно завершил форму
    pub fn request_close(&mut self) -> bool {
        match self.lifecycle {
            Lifecycle::Running => {
                self.lifecycle = Lifecycle::Terminated;
                true
            }
            Lifecycle::Terminated => false,
        }
    }
}
