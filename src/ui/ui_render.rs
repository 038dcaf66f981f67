use eframe::egui::{
    Align, CentralPanel, Context, Frame, Key, Label, Layout, Margin, RichText, ScrollArea,
    TopBottomPanel, Ui, Vec2,
};

use crate::config::CHART_CONFIG;
use crate::engine::UiMessage;
use crate::models::DashboardView;
use crate::ui::config::UI_CONFIG;
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_plot_view::{show_bar_chart, show_doughnut_chart};
use crate::ui::utils::card_frame;

use super::app::EnrolmentDashboardApp;

/// Below this width the two cards stack vertically.
const SIDE_BY_SIDE_MIN_WIDTH: f32 = 820.0;

impl EnrolmentDashboardApp {
    pub(super) fn render_header_panel(&mut self, ctx: &Context) {
        let header_frame = Frame::new()
            .fill(UI_CONFIG.colors.background)
            .inner_margin(Margin::symmetric(24, 16));

        let mut toggle_clicked = false;
        let t = self.engine.translations();

        TopBottomPanel::top("header_panel")
            .frame(header_frame)
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label_title(&*t.dashboard_title);
                        ui.add_space(4.0);
                        ui.label_subdued(&*t.dashboard_subtitle);
                    });
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        toggle_clicked = ui.outline_button(&*t.language_toggle);
                    });
                });
            });

        if toggle_clicked {
            self.emit(UiMessage::ToggleActivated);
        }
    }

    pub(super) fn render_footer_panel(&mut self, ctx: &Context) {
        let footer_frame = Frame::new()
            .fill(UI_CONFIG.colors.background)
            .inner_margin(Margin::symmetric(24, 12));
        let t = self.engine.translations();
        let last_error = self.last_error.clone();

        TopBottomPanel::bottom("footer_panel")
            .frame(footer_frame)
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    if let Some(error) = last_error {
                        ui.label_warning(error);
                    }
                    ui.label(
                        RichText::new(&*t.footer)
                            .small()
                            .color(UI_CONFIG.colors.footer),
                    );
                });
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context, view: &DashboardView) {
        let central_frame = Frame::new()
            .fill(UI_CONFIG.colors.background)
            .inner_margin(Margin::symmetric(24, 8));

        let mut clicked = None;

        CentralPanel::default().frame(central_frame).show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                let width = ui.available_width().min(UI_CONFIG.content_max_width);
                let spacing = ui.spacing().item_spacing.x * 4.0;

                if width >= SIDE_BY_SIDE_MIN_WIDTH {
                    let bar_width = (width - spacing) * UI_CONFIG.bar_chart_share;
                    let doughnut_width = width - spacing - bar_width;
                    ui.horizontal_top(|ui| {
                        ui.allocate_ui_with_layout(
                            Vec2::new(bar_width, CHART_CONFIG.bar.height),
                            Layout::top_down(Align::Min),
                            |ui| clicked = self.bar_chart_card(ui, view),
                        );
                        ui.add_space(spacing);
                        ui.allocate_ui_with_layout(
                            Vec2::new(doughnut_width, CHART_CONFIG.doughnut.height),
                            Layout::top_down(Align::Min),
                            |ui| self.doughnut_card(ui, view),
                        );
                    });
                } else {
                    clicked = self.bar_chart_card(ui, view);
                    ui.add_space(spacing);
                    self.doughnut_card(ui, view);
                }
            });
        });

        if let Some(message) = clicked {
            self.emit(message);
        }
    }

    fn bar_chart_card(&self, ui: &mut Ui, view: &DashboardView) -> Option<UiMessage> {
        let t = self.engine.translations();
        let language = self.engine.language();

        card_frame()
            .show(ui, |ui| {
                ui.label_header(&*t.bar_chart_title);
                ui.label_subdued(&*t.bar_chart_hint);
                ui.add_space(12.0);
                show_bar_chart(ui, &view.bar_series, t, language)
            })
            .inner
    }

    fn doughnut_card(&self, ui: &mut Ui, view: &DashboardView) {
        let language = self.engine.language();
        let t = self.engine.translations();

        card_frame().show(ui, |ui| {
            let title = RichText::new(view.doughnut_title.as_str())
                .size(18.0)
                .strong()
                .color(UI_CONFIG.colors.subheading);
            ui.add(Label::new(title).truncate());
            if view.selected_is_placeholder {
                ui.label_warning(&*t.placeholder_note);
            }
            ui.add_space(12.0);
            show_doughnut_chart(ui, &view.doughnut, language);
        });
    }

    pub(super) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        // Leave keys alone while a text field has focus
        if ctx.wants_keyboard_input() {
            return;
        }

        let mut messages = Vec::new();
        ctx.input(|i| {
            if i.key_pressed(Key::L) {
                messages.push(UiMessage::ToggleActivated);
            }
            if i.key_pressed(Key::ArrowRight) {
                messages.push(UiMessage::SelectNext);
            }
            if i.key_pressed(Key::ArrowLeft) {
                messages.push(UiMessage::SelectPrevious);
            }
        });

        for message in messages {
            self.emit(message);
        }
    }
}
