use eframe::egui::{Color32, Id, LayerId, Order::Tooltip, RichText, Stroke, Ui};

#[allow(deprecated)]
use eframe::egui::show_tooltip_at_pointer;

use egui_plot::{PlotPoint, PlotPoints, PlotUi, Polygon, Text};

use crate::config::CHART_CONFIG;
use crate::domain::Language;
use crate::i18n::Translations;
use crate::models::{BarSeries, DoughnutSlices};
use crate::ui::chart_geometry::{SliceArc, bar_corners, label_anchor, wedge_quads};
use crate::ui::utils::{format_count, slice_color};

/// Context passed to every bar chart layer during rendering.
pub struct BarLayerContext<'a> {
    pub series: &'a BarSeries,
    pub translations: &'a Translations,
    pub language: Language,
    /// Bar under the pointer, if any
    pub hovered: Option<usize>,
}

/// Context passed to every doughnut layer during rendering.
pub struct DoughnutLayerContext<'a> {
    pub doughnut: &'a DoughnutSlices,
    pub arcs: &'a [SliceArc],
    pub language: Language,
    pub hovered: Option<usize>,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer<C> {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &C);
}

// ============================================================================
// BAR CHART: bars
// ============================================================================
pub struct BarsLayer;

impl<'a> PlotLayer<BarLayerContext<'a>> for BarsLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &BarLayerContext<'a>) {
        let cfg = &CHART_CONFIG.bar;

        for (index, entry) in ctx.series.entries.iter().enumerate() {
            let fill = if entry.is_selected {
                cfg.selected_bar_color
            } else {
                cfg.bar_color
            };
            let stroke = if ctx.hovered == Some(index) {
                Stroke::new(2.0, cfg.selected_bar_color)
            } else {
                Stroke::NONE
            };

            let points = PlotPoints::new(bar_corners(index, entry.value as f64, cfg.bar_width));

            // Shared name groups every bar under one legend entry
            let polygon = Polygon::new(ctx.series.series_label.as_str(), points)
                .fill_color(fill)
                .stroke(stroke);

            plot_ui.polygon(polygon);
        }
    }
}

// ============================================================================
// BAR CHART: hover tooltip
// ============================================================================
pub struct BarTooltipLayer;

impl<'a> PlotLayer<BarLayerContext<'a>> for BarTooltipLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &BarLayerContext<'a>) {
        let Some(entry) = ctx.hovered.and_then(|i| ctx.series.entries.get(i)) else {
            return;
        };

        let body = format!(
            "{}: {}",
            ctx.translations.enrolment,
            format_count(entry.value as u64, ctx.language)
        );
        show_tooltip(plot_ui, "bar_tooltip", &entry.label, &body, CHART_CONFIG.bar.selected_bar_color);
    }
}

// ============================================================================
// DOUGHNUT: wedges
// ============================================================================
pub struct SliceLayer;

impl<'a> PlotLayer<DoughnutLayerContext<'a>> for SliceLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &DoughnutLayerContext<'a>) {
        let cfg = &CHART_CONFIG.doughnut;

        for (index, (slice, arc)) in ctx.doughnut.slices.iter().zip(ctx.arcs).enumerate() {
            let color = slice_color(slice.color_index);
            let fill = if ctx.hovered == Some(index) {
                color.gamma_multiply(0.85)
            } else {
                color
            };

            for quad in wedge_quads(arc, cfg.inner_radius, cfg.outer_radius, cfg.segments_per_turn) {
                // A hairline in the fill color hides the seams between quads
                let polygon = Polygon::new(slice.label.as_str(), PlotPoints::new(quad))
                    .fill_color(fill)
                    .stroke(Stroke::new(0.5, fill));
                plot_ui.polygon(polygon);
            }
        }
    }
}

// ============================================================================
// DOUGHNUT: percentage labels
// ============================================================================
pub struct PercentLabelLayer;

impl<'a> PlotLayer<DoughnutLayerContext<'a>> for PercentLabelLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &DoughnutLayerContext<'a>) {
        let cfg = &CHART_CONFIG.doughnut;

        for (slice, arc) in ctx.doughnut.slices.iter().zip(ctx.arcs) {
            let [x, y] = label_anchor(arc, cfg.inner_radius, cfg.outer_radius);
            let text = RichText::new(slice.percent_label.as_str())
                .strong()
                .color(cfg.label_color);
            // Empty name keeps labels out of the legend
            plot_ui.text(Text::new("", PlotPoint::new(x, y), text));
        }
    }
}

// ============================================================================
// DOUGHNUT: hover tooltip
// ============================================================================
pub struct SliceTooltipLayer;

impl<'a> PlotLayer<DoughnutLayerContext<'a>> for SliceTooltipLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &DoughnutLayerContext<'a>) {
        let Some(slice) = ctx.hovered.and_then(|i| ctx.doughnut.slices.get(i)) else {
            return;
        };

        let body = format!(
            "{} ({})",
            format_count(slice.value as u64, ctx.language),
            slice.percent_label
        );
        show_tooltip(plot_ui, "slice_tooltip", &slice.label, &body, slice_color(slice.color_index));
    }
}

fn show_tooltip(plot_ui: &mut PlotUi, id: &str, title: &str, body: &str, accent: Color32) {
    let tooltip_layer = LayerId::new(Tooltip, Id::new("chart_tooltips"));

    #[allow(deprecated)]
    show_tooltip_at_pointer(plot_ui.ctx(), tooltip_layer, Id::new(id), |ui: &mut Ui| {
        ui.label(RichText::new(title).strong());
        ui.label(RichText::new(body).color(accent));
    });
}
