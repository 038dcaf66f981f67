//! Chart visualization configuration

use eframe::egui::Color32;

pub struct BarChartConfig {
    pub bar_color: Color32,
    pub selected_bar_color: Color32,
    pub hover_outline_color: Color32,
    /// Bar width in x-axis units (one unit per university)
    pub bar_width: f64,
    /// Headroom above the tallest bar, as a fraction of its height
    pub y_headroom_pct: f64,
    pub y_axis_divisions: u32,
    pub height: f32,
}

pub struct DoughnutConfig {
    /// Slice colors, consumed in filtered-slice order
    pub slice_colors: &'static [&'static str],
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Gap between adjacent slices, in degrees
    pub padding_angle_deg: f64,
    /// Arc segments per full turn; each segment is drawn as its own convex quad
    pub segments_per_turn: usize,
    pub label_color: Color32,
    pub height: f32,
}

pub struct ChartConfig {
    pub bar: BarChartConfig,
    pub doughnut: DoughnutConfig,
}

pub const CHART_CONFIG: ChartConfig = ChartConfig {
    bar: BarChartConfig {
        bar_color: Color32::from_rgb(0x60, 0xa5, 0xfa),
        selected_bar_color: Color32::from_rgb(0x25, 0x63, 0xeb),
        hover_outline_color: Color32::from_rgb(0xef, 0xf6, 0xff),
        bar_width: 0.6,
        y_headroom_pct: 0.1,
        y_axis_divisions: 4,
        height: 300.0,
    },
    doughnut: DoughnutConfig {
        slice_colors: &[
            "#0088FE", // Blue
            "#00C49F", // Teal
            "#FFBB28", // Amber
        ],
        inner_radius: 60.0,
        outer_radius: 110.0,
        padding_angle_deg: 5.0,
        segments_per_turn: 180,
        label_color: Color32::WHITE,
        height: 300.0,
    },
};
