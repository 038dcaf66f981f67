use serde::{Deserialize, Serialize};

/// One institution's Fall enrolment snapshot.
///
/// `name` doubles as the selection key and the display label, so it must be
/// unique within a dataset (see `Dataset::from_records`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UniversityRecord {
    pub name: String,
    pub ft_undergrad: u32,
    pub ft_grad: u32,
    pub pt_undergrad: u32,
    /// Figures are stand-ins rather than sourced numbers.
    #[serde(default)]
    pub placeholder: bool,
}

impl UniversityRecord {
    pub fn new(name: impl Into<String>, ft_undergrad: u32, ft_grad: u32, pt_undergrad: u32) -> Self {
        Self {
            name: name.into(),
            ft_undergrad,
            ft_grad,
            pt_undergrad,
            placeholder: false,
        }
    }

    pub fn flagged_placeholder(mut self) -> Self {
        self.placeholder = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Enrolment count for a single category.
    pub fn count(&self, category: EnrolmentCategory) -> u32 {
        match category {
            EnrolmentCategory::FtUndergrad => self.ft_undergrad,
            EnrolmentCategory::FtGrad => self.ft_grad,
            EnrolmentCategory::PtUndergrad => self.pt_undergrad,
        }
    }

    // u64 so a large imported dataset can't overflow the sum
    pub fn total(&self) -> u64 {
        self.ft_undergrad as u64 + self.ft_grad as u64 + self.pt_undergrad as u64
    }
}

/// The three enrolment categories, in their fixed display order.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum EnrolmentCategory {
    FtUndergrad,
    FtGrad,
    PtUndergrad,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn count_maps_each_category_to_its_field() {
        let record = UniversityRecord::new("Brock University", 15600, 1800, 1700);
        let counts: Vec<u32> = EnrolmentCategory::iter().map(|c| record.count(c)).collect();
        assert_eq!(counts, vec![15600, 1800, 1700]);
        assert_eq!(record.total(), 19100);
    }

    #[test]
    fn category_keys_match_record_field_names() {
        assert_eq!(EnrolmentCategory::FtUndergrad.as_ref(), "ftUndergrad");
        assert_eq!(EnrolmentCategory::FtGrad.as_ref(), "ftGrad");
        assert_eq!(EnrolmentCategory::PtUndergrad.as_ref(), "ptUndergrad");
    }

    #[test]
    fn placeholder_defaults_to_false_when_absent() {
        let json = r#"{"name":"X","ftUndergrad":1,"ftGrad":2,"ptUndergrad":3}"#;
        let record: UniversityRecord = serde_json::from_str(json).unwrap();
        assert!(!record.placeholder);
        assert_eq!(record.ft_grad, 2);
    }
}
