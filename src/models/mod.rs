// Derived views for the two charts.
// Pure functions of (dataset, translations, selection); rebuilt every frame, never cached.

pub mod bar_series;
pub mod dashboard_view;
pub mod doughnut;

// Re-export key types for convenience
pub use bar_series::{BarEntry, BarSeries, build_bar_series};
pub use dashboard_view::DashboardView;
pub use doughnut::{DoughnutSlice, DoughnutSlices, build_doughnut_slices, percent_of};
