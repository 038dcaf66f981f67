//! Display strings for every supported language.
//!
//! Each language gets a [`Translations`] record with one field per display
//! string, so the dashboard can never render a blank label. String keys only
//! come into play when a translation override file is loaded.

pub mod translations;

use std::collections::HashMap;
use std::path::Path;

use strum::IntoEnumIterator;

use crate::DashboardError;
use crate::domain::Language;

pub use translations::{TRANSLATION_KEYS, Translations};

/// One [`Translations`] entry per [`Language`], stored in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationTable {
    entries: Vec<Translations>,
}

impl LocalizationTable {
    pub fn builtin() -> Self {
        Self {
            entries: Language::iter().map(Translations::builtin).collect(),
        }
    }

    pub fn get(&self, language: Language) -> &Translations {
        &self.entries[language.index()]
    }

    /// Builds a table from `{ "<code>": { "<key>": "<text>", ... }, ... }`.
    ///
    /// Languages absent from the file keep their built-in strings. A language
    /// present in the file must carry every key: debug builds fail with
    /// `MissingTranslation`, release builds show the key name instead.
    pub fn from_json(json: &str) -> Result<Self, DashboardError> {
        let mut overrides: HashMap<String, HashMap<String, String>> = serde_json::from_str(json)?;

        for code in overrides.keys() {
            Language::from_code(code)?;
        }

        let mut entries = Vec::new();
        for language in Language::iter() {
            let entry = match overrides.remove(language.code()) {
                Some(map) => Translations::from_map(language, &map, cfg!(debug_assertions))?,
                None => Translations::builtin(language),
            };
            entries.push(entry);
        }

        Ok(Self { entries })
    }

    pub fn load_json(path: &Path) -> Result<Self, DashboardError> {
        let json = std::fs::read_to_string(path)?;
        let table = Self::from_json(&json)?;
        log::info!("Loaded translation overrides from {:?}", path);
        Ok(table)
    }
}

impl Default for LocalizationTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_map(prefix: &str) -> HashMap<String, String> {
        TRANSLATION_KEYS
            .iter()
            .map(|key| (key.to_string(), format!("{prefix}-{key}")))
            .collect()
    }

    #[test]
    fn builtin_table_has_an_entry_for_every_language() {
        let table = LocalizationTable::builtin();
        for language in Language::iter() {
            let entry = table.get(language);
            assert_eq!(entry.language, language);
            for key in TRANSLATION_KEYS {
                assert!(!entry.text(key).unwrap().is_empty(), "{language}:{key} is blank");
            }
        }
    }

    #[test]
    fn overrides_replace_only_the_listed_language() {
        let json = serde_json::json!({ "fr": complete_map("x") }).to_string();
        let table = LocalizationTable::from_json(&json).unwrap();

        assert_eq!(table.get(Language::Fr).dashboard_title, "x-dashboardTitle");
        assert_eq!(
            table.get(Language::En).dashboard_title,
            Translations::builtin(Language::En).dashboard_title
        );
    }

    #[test]
    fn overrides_for_unknown_language_are_rejected() {
        let json = serde_json::json!({ "de": complete_map("x") }).to_string();
        assert!(matches!(
            LocalizationTable::from_json(&json),
            Err(DashboardError::InvalidArgument(_))
        ));
    }

    #[cfg(debug_assertions)]
    #[test]
    fn incomplete_override_fails_fast_in_debug_builds() {
        let mut map = complete_map("x");
        map.remove("ftGrad");
        let json = serde_json::json!({ "en": map }).to_string();

        match LocalizationTable::from_json(&json) {
            Err(DashboardError::MissingTranslation { language, key }) => {
                assert_eq!(language, Language::En);
                assert_eq!(key, "ftGrad");
            }
            other => panic!("expected MissingTranslation, got {other:?}"),
        }
    }
}
