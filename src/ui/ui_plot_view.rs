use eframe::egui;
use egui_plot::{AxisHints, Corner, GridMark, HPlacement, Legend, Plot, PlotPoint};

use crate::config::CHART_CONFIG;
use crate::domain::Language;
use crate::engine::UiMessage;
use crate::i18n::Translations;
use crate::models::{BarSeries, DoughnutSlices};
use crate::ui::chart_geometry::{bar_index_at, nice_step, slice_arcs, slice_at};
use crate::ui::utils::format_count;

// Import the Layer System
use crate::ui::plot_layers::{
    BarLayerContext, BarTooltipLayer, BarsLayer, DoughnutLayerContext, PercentLabelLayer,
    PlotLayer, SliceLayer, SliceTooltipLayer,
};

/// Draws the enrolment bar chart. Returns a selection message when a bar is clicked.
pub fn show_bar_chart(
    ui: &mut egui::Ui,
    series: &BarSeries,
    translations: &Translations,
    language: Language,
) -> Option<UiMessage> {
    let cfg = &CHART_CONFIG.bar;
    let bar_count = series.len();

    let y_step = nice_step(series.max_value() as f64, cfg.y_axis_divisions);
    let y_max = (((series.max_value() as f64 * (1.0 + cfg.y_headroom_pct)) / y_step).ceil() * y_step)
        .max(y_step);
    let x_min = -0.5;
    let x_max = bar_count as f64 - 0.5;

    let names: Vec<String> = series.entries.iter().map(|e| e.label.clone()).collect();

    let plot_response = Plot::new("enrolment_bar_chart")
        .height(cfg.height)
        .legend(Legend::default().position(Corner::RightTop))
        .custom_x_axes(vec![create_x_axis(translations, names)])
        .custom_y_axes(vec![create_y_axis(translations, language)])
        // Suppress Defaults
        .label_formatter(|_, _| String::new())
        .show_x(false)
        .show_y(false)
        .x_grid_spacer(move |_input| {
            (0..bar_count)
                .map(|i| GridMark {
                    value: i as f64,
                    step_size: 1.0,
                })
                .collect()
        })
        .y_grid_spacer(move |input| {
            let (_, max) = input.bounds;
            let mut marks = Vec::new();
            let mut value = 0.0;
            while value <= max {
                marks.push(GridMark { value, step_size: y_step });
                value += y_step;
            }
            marks
        })
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(x_min..=x_max);
            plot_ui.set_plot_bounds_y(0.0..=y_max);

            let pointer = plot_ui.pointer_coordinate();
            let hovered = pointer.and_then(|p| bar_index_at(p.x, bar_count, cfg.bar_width));

            let ctx = BarLayerContext {
                series,
                translations,
                language,
                hovered,
            };

            // Back to front
            let layers: Vec<Box<dyn PlotLayer<BarLayerContext>>> =
                vec![Box::new(BarsLayer), Box::new(BarTooltipLayer)];
            for layer in layers {
                layer.render(plot_ui, &ctx);
            }

            hovered
        });

    if !plot_response.response.clicked() {
        return None;
    }

    plot_response
        .inner
        .and_then(|index| series.entries.get(index))
        .map(|entry| UiMessage::BarActivated {
            name: entry.label.clone(),
        })
}

/// Draws the category breakdown doughnut for the selected university.
pub fn show_doughnut_chart(ui: &mut egui::Ui, doughnut: &DoughnutSlices, language: Language) {
    let cfg = &CHART_CONFIG.doughnut;
    let arcs = slice_arcs(&doughnut.fractions(), cfg.padding_angle_deg);
    let extent = cfg.outer_radius * 1.15;

    Plot::new("enrolment_doughnut_chart")
        .height(cfg.height)
        .data_aspect(1.0)
        .legend(Legend::default().position(Corner::RightBottom))
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .label_formatter(|_, _| String::new())
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(-extent..=extent);
            plot_ui.set_plot_bounds_y(-extent..=extent);

            let hovered = plot_ui
                .pointer_coordinate()
                .and_then(|p: PlotPoint| slice_at([p.x, p.y], &arcs, cfg.inner_radius, cfg.outer_radius));

            let ctx = DoughnutLayerContext {
                doughnut,
                arcs: &arcs,
                language,
                hovered,
            };

            let layers: Vec<Box<dyn PlotLayer<DoughnutLayerContext>>> = vec![
                Box::new(SliceLayer),
                Box::new(PercentLabelLayer),
                Box::new(SliceTooltipLayer),
            ];
            for layer in layers {
                layer.render(plot_ui, &ctx);
            }
        });
}

fn create_x_axis(translations: &Translations, names: Vec<String>) -> AxisHints<'static> {
    AxisHints::new_x()
        .label(translations.university.to_string())
        .formatter(move |grid_mark, _range| {
            let nearest = grid_mark.value.round();
            if (grid_mark.value - nearest).abs() > f64::EPSILON || nearest < 0.0 {
                return String::new();
            }
            names.get(nearest as usize).cloned().unwrap_or_default()
        })
}

fn create_y_axis(translations: &Translations, language: Language) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(translations.enrolment.to_string())
        .formatter(move |grid_mark, _range| {
            if grid_mark.value < 0.0 {
                return String::new();
            }
            format_count(grid_mark.value.round() as u64, language)
        })
        .placement(HPlacement::Left)
}
