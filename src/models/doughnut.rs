use serde::Serialize;
use strum::IntoEnumIterator;

use crate::domain::{EnrolmentCategory, UniversityRecord};
use crate::i18n::Translations;

/// One wedge of the doughnut chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoughnutSlice {
    pub category: EnrolmentCategory,
    pub label: String,
    pub value: u32,
    /// Position within the filtered sequence, not the category's position.
    pub color_index: usize,
    pub percent: u32,
    pub percent_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DoughnutSlices {
    pub slices: Vec<DoughnutSlice>,
    pub total: u64,
}

impl DoughnutSlices {
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn percents(&self) -> Vec<u32> {
        self.slices.iter().map(|slice| slice.percent).collect()
    }

    /// Fraction of the full circle each slice spans, in slice order.
    pub fn fractions(&self) -> Vec<f64> {
        if self.total == 0 {
            return Vec::new();
        }
        self.slices
            .iter()
            .map(|slice| slice.value as f64 / self.total as f64)
            .collect()
    }
}

/// `round(100 * value / total)`. Not adjusted so a set of slices sums to 100.
pub fn percent_of(value: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * value as f64 / total as f64).round() as u32
}

/// Breakdown of the selected record into non-zero category slices.
///
/// `None` (no resolvable selection) and an all-zero record both give an empty
/// result, which the chart draws as nothing.
pub fn build_doughnut_slices(
    record: Option<&UniversityRecord>,
    translations: &Translations,
) -> DoughnutSlices {
    let Some(record) = record else {
        return DoughnutSlices::default();
    };

    let present: Vec<(EnrolmentCategory, u32)> = EnrolmentCategory::iter()
        .map(|category| (category, record.count(category)))
        .filter(|(_, value)| *value > 0)
        .collect();

    let total: u64 = present.iter().map(|(_, value)| *value as u64).sum();

    let slices = present
        .into_iter()
        .enumerate()
        .map(|(color_index, (category, value))| {
            let percent = percent_of(value as u64, total);
            DoughnutSlice {
                category,
                label: translations.category_label(category).to_string(),
                value,
                color_index,
                percent,
                percent_label: format!("{}%", percent),
            }
        })
        .collect();

    DoughnutSlices { slices, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Language;
    use proptest::prelude::*;

    fn en() -> Translations {
        Translations::builtin(Language::En)
    }

    #[test]
    fn zero_categories_are_dropped() {
        let brescia = UniversityRecord::new("Brescia University College", 1500, 0, 100);
        let doughnut = build_doughnut_slices(Some(&brescia), &en());

        assert_eq!(doughnut.len(), 2);
        assert_eq!(doughnut.slices[0].category, EnrolmentCategory::FtUndergrad);
        assert_eq!(doughnut.slices[1].category, EnrolmentCategory::PtUndergrad);
        assert_eq!(doughnut.total, 1600);
    }

    #[test]
    fn colors_follow_filtered_position() {
        let brescia = UniversityRecord::new("Brescia University College", 1500, 0, 100);
        let doughnut = build_doughnut_slices(Some(&brescia), &en());
        let color_indices: Vec<usize> = doughnut.slices.iter().map(|s| s.color_index).collect();
        assert_eq!(color_indices, vec![0, 1]);
    }

    #[test]
    fn percentages_round_independently() {
        let algoma = UniversityRecord::new("Algoma University", 5700, 70, 480);
        let doughnut = build_doughnut_slices(Some(&algoma), &en());

        assert_eq!(doughnut.total, 6250);
        assert_eq!(doughnut.percents(), vec![91, 1, 8]);
        assert_eq!(doughnut.slices[2].percent_label, "8%");
    }

    #[test]
    fn rounding_is_not_forced_to_one_hundred() {
        let record = UniversityRecord::new("Even Split", 1, 1, 1);
        let doughnut = build_doughnut_slices(Some(&record), &en());
        assert_eq!(doughnut.percents(), vec![33, 33, 33]);
    }

    #[test]
    fn all_zero_record_has_no_slices() {
        let empty = UniversityRecord::new("Closed Campus", 0, 0, 0);
        let doughnut = build_doughnut_slices(Some(&empty), &en());
        assert!(doughnut.is_empty());
        assert_eq!(doughnut.total, 0);
        assert!(doughnut.fractions().is_empty());
    }

    #[test]
    fn missing_record_has_no_slices() {
        assert_eq!(build_doughnut_slices(None, &en()), DoughnutSlices::default());
    }

    #[test]
    fn labels_follow_language() {
        let carleton = UniversityRecord::new("Carleton University", 19600, 3900, 5500);
        let fr = build_doughnut_slices(Some(&carleton), &Translations::builtin(Language::Fr));
        let labels: Vec<&str> = fr.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["1er cycle TP", "2e/3e cycle TP", "1er cycle TPartiel"]);
    }

    proptest! {
        #[test]
        fn slices_are_positive_and_sum_to_total(
            ftu in prop_oneof![Just(0u32), 1u32..100_000],
            ftg in prop_oneof![Just(0u32), 1u32..100_000],
            ptu in prop_oneof![Just(0u32), 1u32..100_000],
        ) {
            let record = UniversityRecord::new("Any", ftu, ftg, ptu);
            let doughnut = build_doughnut_slices(Some(&record), &en());

            let expected = [ftu, ftg, ptu].iter().filter(|v| **v > 0).count();
            prop_assert_eq!(doughnut.len(), expected);
            prop_assert!(doughnut.slices.iter().all(|s| s.value > 0));
            prop_assert_eq!(doughnut.total, record.total());

            for (i, slice) in doughnut.slices.iter().enumerate() {
                prop_assert_eq!(slice.color_index, i);
                prop_assert!(slice.percent <= 100);
            }
        }
    }
}
