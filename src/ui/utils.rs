use eframe::egui::{Color32, Context, Frame, Margin, Stroke, Visuals};

use crate::config::CHART_CONFIG;
use crate::domain::Language;
use crate::ui::config::UI_CONFIG;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::light();

    visuals.window_fill = UI_CONFIG.colors.card;
    visuals.panel_fill = UI_CONFIG.colors.background;
    visuals.override_text_color = Some(UI_CONFIG.colors.label);

    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// White rounded card that wraps each chart.
pub fn card_frame() -> Frame {
    Frame::new()
        .fill(UI_CONFIG.colors.card)
        .stroke(Stroke::new(1.0, UI_CONFIG.colors.card_border))
        .corner_radius(UI_CONFIG.card_rounding)
        .inner_margin(Margin::same(UI_CONFIG.card_margin))
}

/// Groups digits in threes with the language's thousands separator.
/// - en: 29,000
/// - fr: 29 000 (narrow no-break space)
pub fn format_count(value: u64, language: Language) -> String {
    let separator = match language {
        Language::En => ',',
        Language::Fr => '\u{202F}',
    };

    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Color for the slice at `color_index` in the filtered sequence.
pub fn slice_color(color_index: usize) -> Color32 {
    let palette = CHART_CONFIG.doughnut.slice_colors;
    if palette.is_empty() {
        return Color32::GRAY;
    }
    let html = palette[color_index % palette.len()];
    match colorgrad::Color::from_html(html) {
        Ok(color) => to_egui_color(color),
        Err(e) => {
            log::warn!("Bad slice color '{}': {}", html, e);
            Color32::GRAY
        }
    }
}

fn to_egui_color(colorgrad_color: colorgrad::Color) -> Color32 {
    let rgba8 = colorgrad_color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba8[0], rgba8[1], rgba8[2], 255)
}
