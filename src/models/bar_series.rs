use serde::Serialize;

use crate::data::Dataset;
use crate::domain::EnrolmentCategory;
use crate::i18n::Translations;

/// One bar: a university and its full-time undergraduate count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarEntry {
    pub label: String,
    pub value: u32,
    pub is_selected: bool,
}

/// The bar chart's single series, labelled with the localized category name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarSeries {
    pub series_label: String,
    pub entries: Vec<BarEntry>,
}

impl BarSeries {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_value(&self) -> u32 {
        self.entries.iter().map(|entry| entry.value).max().unwrap_or(0)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.entries.iter().position(|entry| entry.is_selected)
    }
}

/// One entry per record, in dataset order. Nothing is filtered.
///
/// `selected` only sets `is_selected` on the matching entry; it never changes
/// the shape of the series.
pub fn build_bar_series(
    dataset: &Dataset,
    translations: &Translations,
    selected: Option<&str>,
) -> BarSeries {
    let entries = dataset
        .iter()
        .map(|record| BarEntry {
            label: record.name.clone(),
            value: record.ft_undergrad,
            is_selected: selected == Some(record.name.as_str()),
        })
        .collect();

    BarSeries {
        series_label: translations
            .category_label(EnrolmentCategory::FtUndergrad)
            .to_string(),
        entries,
    }
}
