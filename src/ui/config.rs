use eframe::egui::Color32;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subheading: Color32,
    pub background: Color32,
    pub card: Color32,
    pub card_border: Color32,
    pub toggle_text: Color32,
    pub placeholder_note: Color32,
    pub footer: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub card_rounding: u8,
    pub card_margin: i8,
    pub content_max_width: f32,
    /// Share of the row given to the bar chart; the doughnut gets the rest
    pub bar_chart_share: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(0x11, 0x18, 0x27),
        heading: Color32::from_rgb(0x1d, 0x4e, 0xd8),
        subheading: Color32::from_rgb(0x1f, 0x29, 0x37),
        background: Color32::from_rgb(0xf9, 0xfa, 0xfb),
        card: Color32::WHITE,
        card_border: Color32::from_rgb(0xe5, 0xe7, 0xeb),
        toggle_text: Color32::from_rgb(0x25, 0x63, 0xeb),
        placeholder_note: Color32::from_rgb(0xb4, 0x53, 0x09),
        footer: Color32::from_rgb(0x9c, 0xa3, 0xaf),
    },
    card_rounding: 12,
    card_margin: 24,
    content_max_width: 1200.0,
    bar_chart_share: 0.6,
};
