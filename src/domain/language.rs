use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::DashboardError;

/// Supported display languages.
///
/// Declaration order is the enumeration order: the first variant is the
/// session default and `next()` cycles through the variants in this order.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
    strum_macros::EnumString,
    strum_macros::Display,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    pub fn first() -> Self {
        Self::default()
    }

    /// The short code, e.g. "en".
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// Position in the fixed enumeration order.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_code(code: &str) -> Result<Self, DashboardError> {
        Language::from_str(code.trim())
            .map_err(|_| DashboardError::InvalidArgument(format!("unsupported language code '{}'", code)))
    }

    /// The next language in enumeration order, wrapping around.
    pub fn next(self) -> Self {
        Language::iter()
            .cycle()
            .skip_while(|lang| *lang != self)
            .nth(1)
            .unwrap_or(self)
    }

    pub fn supported_codes() -> Vec<&'static str> {
        Language::iter().map(Language::code).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_language_is_english() {
        assert_eq!(Language::first(), Language::En);
        assert_eq!(Language::supported_codes(), vec!["en", "fr"]);
    }

    #[test]
    fn next_cycles_in_declaration_order() {
        assert_eq!(Language::En.next(), Language::Fr);
        assert_eq!(Language::Fr.next(), Language::En);
    }

    #[test]
    fn from_code_rejects_unknown_codes() {
        assert_eq!(Language::from_code("fr").unwrap(), Language::Fr);
        assert!(matches!(
            Language::from_code("de"),
            Err(DashboardError::InvalidArgument(_))
        ));
    }

    #[test]
    fn code_and_display_agree() {
        for lang in Language::iter() {
            let as_str: &str = lang.as_ref();
            assert_eq!(lang.to_string(), lang.code());
            assert_eq!(as_str, lang.code());
        }
    }
}
