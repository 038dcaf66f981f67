use std::collections::HashSet;
use std::path::Path;

use crate::DashboardError;
use crate::domain::UniversityRecord;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// The immutable, ordered table of university records.
///
/// Dataset order is display order. A `Dataset` is never empty and never holds
/// two records with the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<UniversityRecord>,
}

impl Dataset {
    /// Fall 2024 full-time and part-time enrolment figures.
    pub fn builtin() -> Self {
        Self {
            records: vec![
                UniversityRecord::new("Algoma University", 5700, 70, 480),
                // Not sourced: stand-in figures for the demo
                UniversityRecord::new("Brescia University College", 1500, 0, 100)
                    .flagged_placeholder(),
                UniversityRecord::new("Brock University", 15600, 1800, 1700),
                UniversityRecord::new("Carleton University", 19600, 3900, 5500),
            ],
        }
    }

    pub fn from_records(records: Vec<UniversityRecord>) -> Result<Self, DashboardError> {
        if records.is_empty() {
            return Err(DashboardError::InvalidDataset(
                "dataset must contain at least one university".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for record in &records {
            if record.name.trim().is_empty() {
                return Err(DashboardError::InvalidDataset(
                    "university name must not be blank".to_string(),
                ));
            }
            if !seen.insert(record.name.as_str()) {
                return Err(DashboardError::InvalidDataset(format!(
                    "duplicate university name '{}'",
                    record.name
                )));
            }
        }

        Ok(Self { records })
    }

    /// Parses a JSON array of records (camelCase field names).
    pub fn from_json(json: &str) -> Result<Self, DashboardError> {
        let records: Vec<UniversityRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    pub fn load_json(path: &Path) -> Result<Self, DashboardError> {
        let json = std::fs::read_to_string(path)?;
        let dataset = Self::from_json(&json)?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_data_loading {
            log::info!("Loaded {} universities from {:?}", dataset.len(), path);
        }

        Ok(dataset)
    }

    pub fn records(&self) -> &[UniversityRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UniversityRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    // Always false once constructed
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The first record, which is the default selection.
    pub fn first(&self) -> &UniversityRecord {
        &self.records[0]
    }

    pub fn find(&self, name: &str) -> Option<&UniversityRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|record| record.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, index: usize) -> Option<&UniversityRecord> {
        self.records.get(index)
    }

    pub fn names(&self) -> Vec<String> {
        self.records.iter().map(|record| record.name.clone()).collect()
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a UniversityRecord;
    type IntoIter = std::slice::Iter<'a, UniversityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_keeps_literal_order() {
        let dataset = Dataset::builtin();
        assert_eq!(
            dataset.names(),
            vec![
                "Algoma University",
                "Brescia University College",
                "Brock University",
                "Carleton University",
            ]
        );
        assert_eq!(dataset.first().name, "Algoma University");
    }

    #[test]
    fn only_brescia_is_flagged_as_placeholder() {
        let dataset = Dataset::builtin();
        let flagged: Vec<&str> = dataset
            .iter()
            .filter(|r| r.placeholder)
            .map(|r| r.name())
            .collect();
        assert_eq!(flagged, vec!["Brescia University College"]);
    }

    #[test]
    fn rejects_empty_and_duplicate_datasets() {
        assert!(matches!(
            Dataset::from_records(vec![]),
            Err(DashboardError::InvalidDataset(_))
        ));

        let duplicated = vec![
            UniversityRecord::new("Brock University", 1, 2, 3),
            UniversityRecord::new("Brock University", 4, 5, 6),
        ];
        assert!(matches!(
            Dataset::from_records(duplicated),
            Err(DashboardError::InvalidDataset(_))
        ));
    }

    #[test]
    fn parses_json_dataset() {
        let json = r#"[
            {"name": "Trent University", "ftUndergrad": 9000, "ftGrad": 400, "ptUndergrad": 1200},
            {"name": "Nipissing University", "ftUndergrad": 4000, "ftGrad": 0, "ptUndergrad": 900, "placeholder": true}
        ]"#;
        let dataset = Dataset::from_json(json).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.position("Nipissing University"), Some(1));
        assert!(dataset.find("Nipissing University").unwrap().placeholder);
        assert!(dataset.find("Lakehead University").is_none());
    }

    #[test]
    fn malformed_json_surfaces_json_error() {
        assert!(matches!(
            Dataset::from_json("[{\"name\": 3}]"),
            Err(DashboardError::Json(_))
        ));
    }
}
