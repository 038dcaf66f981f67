use serde::Serialize;

use crate::data::Dataset;
use crate::i18n::Translations;
use crate::models::bar_series::{BarSeries, build_bar_series};
use crate::models::doughnut::{DoughnutSlices, build_doughnut_slices};

/// Everything the charts need for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub bar_series: BarSeries,
    pub doughnut: DoughnutSlices,
    /// "<prefix> <university>"
    pub doughnut_title: String,
    pub selected_is_placeholder: bool,
}

impl DashboardView {
    pub fn build(dataset: &Dataset, translations: &Translations, selected_name: &str) -> Self {
        let record = dataset.find(selected_name);

        Self {
            bar_series: build_bar_series(dataset, translations, Some(selected_name)),
            doughnut: build_doughnut_slices(record, translations),
            doughnut_title: format!("{} {}", translations.doughnut_chart_title, selected_name),
            selected_is_placeholder: record.is_some_and(|r| r.placeholder),
        }
    }
}
