use eframe::egui::{Button, Color32, RichText, Stroke, Ui};

use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, gray text (chart hints, subtitles).
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders the dashboard title.
    fn label_title(&mut self, text: impl Into<String>);

    /// Renders a card heading.
    fn label_header(&mut self, text: impl Into<String>);

    /// Renders a warning/info message (amber).
    fn label_warning(&mut self, text: impl Into<String>);

    /// Outlined button in the heading color. Returns true when clicked.
    fn outline_button(&mut self, text: impl Into<String>) -> bool;
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn label_title(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .size(28.0)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
    }

    fn label_header(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .size(18.0)
                .strong()
                .color(UI_CONFIG.colors.subheading),
        );
    }

    fn label_warning(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .small()
                .italics()
                .color(UI_CONFIG.colors.placeholder_note),
        );
    }

    fn outline_button(&mut self, text: impl Into<String>) -> bool {
        let button = Button::new(
            RichText::new(text)
                .strong()
                .color(UI_CONFIG.colors.toggle_text),
        )
        .fill(UI_CONFIG.colors.card)
        .stroke(Stroke::new(1.0, UI_CONFIG.colors.toggle_text));

        self.add(button).clicked()
    }
}
