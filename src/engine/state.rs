use crate::data::Dataset;
use crate::domain::Language;

/// The two pieces of session state: active language and selected university.
///
/// Only `DashboardEngine` mutates this, and only after validating the new value,
/// so `selected_university` always names a record in the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub language: Language,
    pub selected_university: String,
}

impl SelectionState {
    /// Defaults: first language, first record.
    pub fn new(dataset: &Dataset) -> Self {
        Self {
            language: Language::first(),
            selected_university: dataset.first().name.clone(),
        }
    }

    pub fn language_code(&self) -> &'static str {
        self.language.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_language_and_first_record() {
        let dataset = Dataset::builtin();
        let state = SelectionState::new(&dataset);
        assert_eq!(state.language_code(), "en");
        assert_eq!(state.selected_university, dataset.first().name);
    }
}
