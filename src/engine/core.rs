use std::sync::Arc;

use crate::DashboardError;
use crate::data::Dataset;
use crate::domain::{Language, UniversityRecord};
use crate::i18n::{LocalizationTable, Translations};
use crate::models::DashboardView;

use super::messages::UiMessage;
use super::state::SelectionState;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Single source of truth for what the dashboard currently shows.
pub struct DashboardEngine {
    /// Shared immutable data
    pub dataset: Arc<Dataset>,
    pub localization: Arc<LocalizationTable>,

    /// The only mutable state
    state: SelectionState,
}

impl DashboardEngine {
    pub fn new(dataset: Dataset, localization: LocalizationTable) -> Self {
        let state = SelectionState::new(&dataset);
        Self {
            dataset: Arc::new(dataset),
            localization: Arc::new(localization),
            state,
        }
    }

    pub fn with_builtin_data() -> Self {
        Self::new(Dataset::builtin(), LocalizationTable::builtin())
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn language(&self) -> Language {
        self.state.language
    }

    pub fn selected_name(&self) -> &str {
        &self.state.selected_university
    }

    pub fn translations(&self) -> &Translations {
        self.localization.get(self.state.language)
    }

    /// The selected record. Falls back to the first record, though the
    /// selection can't name anything outside the dataset.
    pub fn selected_record(&self) -> &UniversityRecord {
        self.dataset
            .find(&self.state.selected_university)
            .unwrap_or_else(|| self.dataset.first())
    }

    /// Replaces the language. Unsupported codes are `InvalidArgument` and leave state alone.
    pub fn set_language(&mut self, code: &str) -> Result<(), DashboardError> {
        let language = Language::from_code(code)?;
        self.apply_language(language);
        Ok(())
    }

    /// Cycles to the next language in enumeration order.
    pub fn toggle_language(&mut self) -> Language {
        let next = self.state.language.next();
        self.apply_language(next);
        next
    }

    /// Replaces the selection. Unknown names are `NotFound` and leave state alone.
    pub fn select_university(&mut self, name: &str) -> Result<(), DashboardError> {
        if !self.dataset.contains(name) {
            log::warn!("Ignoring selection of unknown university '{}'", name);
            return Err(DashboardError::NotFound(name.to_string()));
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_changes && self.state.selected_university != name {
            log::info!(
                "Selection: '{}' -> '{}'",
                self.state.selected_university,
                name
            );
        }

        self.state.selected_university = name.to_string();
        Ok(())
    }

    /// Moves the selection `offset` places through the dataset, wrapping.
    pub fn select_relative(&mut self, offset: isize) -> Result<(), DashboardError> {
        let len = self.dataset.len() as isize;
        let current = self
            .dataset
            .position(&self.state.selected_university)
            .unwrap_or(0) as isize;
        let target = (current + offset).rem_euclid(len) as usize;

        let name = match self.dataset.get(target) {
            Some(record) => record.name.clone(),
            None => return Err(DashboardError::NotFound(format!("index {}", target))),
        };
        self.select_university(&name)
    }

    pub fn dispatch(&mut self, message: UiMessage) -> Result<(), DashboardError> {
        match message {
            UiMessage::BarActivated { name } => self.select_university(&name),
            UiMessage::ToggleActivated => {
                self.toggle_language();
                Ok(())
            }
            UiMessage::LanguageChosen(code) => self.set_language(&code),
            UiMessage::SelectNext => self.select_relative(1),
            UiMessage::SelectPrevious => self.select_relative(-1),
        }
    }

    /// Derived views for the current state. Recomputed on every call.
    pub fn view(&self) -> DashboardView {
        DashboardView::build(
            &self.dataset,
            self.translations(),
            &self.state.selected_university,
        )
    }

    fn apply_language(&mut self, language: Language) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_changes && self.state.language != language {
            log::info!("Language: {} -> {}", self.state.language, language);
        }

        self.state.language = language;
    }
}

impl Default for DashboardEngine {
    fn default() -> Self {
        Self::with_builtin_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn unsupported_language_is_rejected_without_mutation() {
        let mut engine = DashboardEngine::default();
        engine.set_language("fr").unwrap();

        let result = engine.set_language("es");
        assert!(matches!(result, Err(DashboardError::InvalidArgument(_))));
        assert_eq!(engine.language(), Language::Fr);
    }

    #[test]
    fn unknown_university_keeps_previous_selection() {
        let mut engine = DashboardEngine::default();
        engine.select_university("Brock University").unwrap();

        let result = engine.select_university("Nonexistent University");
        assert!(matches!(result, Err(DashboardError::NotFound(_))));
        assert_eq!(engine.selected_name(), "Brock University");
    }

    #[test]
    fn selection_and_language_are_independent() {
        let mut engine = DashboardEngine::default();
        engine.select_university("Carleton University").unwrap();
        engine.toggle_language();
        assert_eq!(engine.selected_name(), "Carleton University");

        engine.select_university("Algoma University").unwrap();
        assert_eq!(engine.language(), Language::Fr);
    }

    #[test]
    fn relative_selection_wraps_both_ways() {
        let mut engine = DashboardEngine::default();
        engine.dispatch(UiMessage::SelectPrevious).unwrap();
        assert_eq!(engine.selected_name(), "Carleton University");

        engine.dispatch(UiMessage::SelectNext).unwrap();
        assert_eq!(engine.selected_name(), "Algoma University");
    }

    #[test]
    fn translations_follow_language() {
        let mut engine = DashboardEngine::default();
        assert_eq!(engine.translations().language_toggle, "Français");
        engine.dispatch(UiMessage::ToggleActivated).unwrap();
        assert_eq!(engine.translations().language_toggle, "English");
    }

    proptest! {
        #[test]
        fn even_number_of_toggles_restores_language(pairs in 0usize..20) {
            let mut engine = DashboardEngine::default();
            let start = engine.language();
            for _ in 0..pairs * 2 {
                engine.toggle_language();
            }
            prop_assert_eq!(engine.language(), start);
        }

        #[test]
        fn arbitrary_names_never_leave_a_dangling_selection(name in ".{0,40}") {
            let mut engine = DashboardEngine::default();
            let _ = engine.select_university(&name);
            prop_assert!(engine.dataset.contains(engine.selected_name()));
        }
    }
}
