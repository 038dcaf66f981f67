use std::borrow::Cow;
use std::collections::HashMap;

use crate::DashboardError;
use crate::domain::{EnrolmentCategory, Language};

/// Lookup keys, in field order. Used by override files and [`Translations::text`].
pub const TRANSLATION_KEYS: [&str; 13] = [
    "dashboardTitle",
    "dashboardSubtitle",
    "barChartTitle",
    "barChartHint",
    "doughnutChartTitle",
    "ftUndergrad",
    "ftGrad",
    "ptUndergrad",
    "university",
    "enrolment",
    "languageToggle",
    "footer",
    "placeholderNote",
];

/// Every display string for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translations {
    pub language: Language,
    pub dashboard_title: Cow<'static, str>,
    pub dashboard_subtitle: Cow<'static, str>,
    pub bar_chart_title: Cow<'static, str>,
    pub bar_chart_hint: Cow<'static, str>,
    /// Prefix, followed by the selected university's name.
    pub doughnut_chart_title: Cow<'static, str>,
    pub ft_undergrad: Cow<'static, str>,
    pub ft_grad: Cow<'static, str>,
    pub pt_undergrad: Cow<'static, str>,
    pub university: Cow<'static, str>,
    pub enrolment: Cow<'static, str>,
    /// Names the language the toggle switches *to*.
    pub language_toggle: Cow<'static, str>,
    pub footer: Cow<'static, str>,
    pub placeholder_note: Cow<'static, str>,
}

impl Translations {
    pub fn builtin(language: Language) -> Self {
        match language {
            Language::En => Self {
                language,
                dashboard_title: Cow::Borrowed("Canadian University Enrolment Dashboard"),
                dashboard_subtitle: Cow::Borrowed(
                    "Fall 2024 Enrolment Data | Source: Association of Atlantic Universities, \
                     Council of Ontario Universities, Individual institutions, \
                     Bureau de coopération interuniversitaire",
                ),
                bar_chart_title: Cow::Borrowed("Full-Time Undergraduate Enrolment"),
                bar_chart_hint: Cow::Borrowed("Click a bar to see details"),
                doughnut_chart_title: Cow::Borrowed("Enrolment Breakdown for"),
                ft_undergrad: Cow::Borrowed("FT Undergrad"),
                ft_grad: Cow::Borrowed("FT Grad"),
                pt_undergrad: Cow::Borrowed("PT Undergrad"),
                university: Cow::Borrowed("University"),
                enrolment: Cow::Borrowed("Enrolment"),
                language_toggle: Cow::Borrowed("Français"),
                footer: Cow::Borrowed("SEG3125 - Assignment 5 - Interactive Dashboard"),
                placeholder_note: Cow::Borrowed("Placeholder figures, not sourced data"),
            },
            Language::Fr => Self {
                language,
                dashboard_title: Cow::Borrowed(
                    "Tableau de Bord des Inscriptions Universitaires Canadiennes",
                ),
                dashboard_subtitle: Cow::Borrowed(
                    "Données d'inscription pour l'automne 2024 | Source : Association des \
                     universités de l'Atlantique, Conseil des universités de l'Ontario, \
                     Établissements individuels, Bureau de coopération interuniversitaire",
                ),
                bar_chart_title: Cow::Borrowed("Inscriptions de Premier Cycle à Temps Plein"),
                bar_chart_hint: Cow::Borrowed("Cliquez sur une barre pour voir les détails"),
                doughnut_chart_title: Cow::Borrowed("Répartition des Inscriptions pour"),
                ft_undergrad: Cow::Borrowed("1er cycle TP"),
                ft_grad: Cow::Borrowed("2e/3e cycle TP"),
                pt_undergrad: Cow::Borrowed("1er cycle TPartiel"),
                university: Cow::Borrowed("Université"),
                enrolment: Cow::Borrowed("Inscriptions"),
                language_toggle: Cow::Borrowed("English"),
                footer: Cow::Borrowed("SEG3125 - Devoir 5 - Tableau de bord interactif"),
                placeholder_note: Cow::Borrowed("Données fictives, non issues d'une source"),
            },
        }
    }

    /// Builds an entry from a key/text map.
    ///
    /// With `strict` a missing key is an error; otherwise the key name itself
    /// is shown so the gap stays visible on screen.
    pub fn from_map(
        language: Language,
        map: &HashMap<String, String>,
        strict: bool,
    ) -> Result<Self, DashboardError> {
        let lookup = |key: &str| -> Result<Cow<'static, str>, DashboardError> {
            match map.get(key) {
                Some(text) => Ok(Cow::Owned(text.clone())),
                None if strict => Err(DashboardError::MissingTranslation {
                    language,
                    key: key.to_string(),
                }),
                None => {
                    log::warn!("Missing translation '{}' for '{}', showing key", key, language);
                    Ok(Cow::Owned(key.to_string()))
                }
            }
        };

        Ok(Self {
            language,
            dashboard_title: lookup("dashboardTitle")?,
            dashboard_subtitle: lookup("dashboardSubtitle")?,
            bar_chart_title: lookup("barChartTitle")?,
            bar_chart_hint: lookup("barChartHint")?,
            doughnut_chart_title: lookup("doughnutChartTitle")?,
            ft_undergrad: lookup("ftUndergrad")?,
            ft_grad: lookup("ftGrad")?,
            pt_undergrad: lookup("ptUndergrad")?,
            university: lookup("university")?,
            enrolment: lookup("enrolment")?,
            language_toggle: lookup("languageToggle")?,
            footer: lookup("footer")?,
            placeholder_note: lookup("placeholderNote")?,
        })
    }

    /// Dynamic lookup by string key.
    pub fn text(&self, key: &str) -> Result<&str, DashboardError> {
        let text = match key {
            "dashboardTitle" => &self.dashboard_title,
            "dashboardSubtitle" => &self.dashboard_subtitle,
            "barChartTitle" => &self.bar_chart_title,
            "barChartHint" => &self.bar_chart_hint,
            "doughnutChartTitle" => &self.doughnut_chart_title,
            "ftUndergrad" => &self.ft_undergrad,
            "ftGrad" => &self.ft_grad,
            "ptUndergrad" => &self.pt_undergrad,
            "university" => &self.university,
            "enrolment" => &self.enrolment,
            "languageToggle" => &self.language_toggle,
            "footer" => &self.footer,
            "placeholderNote" => &self.placeholder_note,
            _ => {
                return Err(DashboardError::MissingTranslation {
                    language: self.language,
                    key: key.to_string(),
                });
            }
        };
        Ok(&**text)
    }

    /// Like [`Translations::text`] but falls back to the key name.
    pub fn text_or_key<'a>(&'a self, key: &'a str) -> &'a str {
        self.text(key).unwrap_or(key)
    }

    pub fn category_label(&self, category: EnrolmentCategory) -> &str {
        match category {
            EnrolmentCategory::FtUndergrad => &*self.ft_undergrad,
            EnrolmentCategory::FtGrad => &*self.ft_grad,
            EnrolmentCategory::PtUndergrad => &*self.pt_undergrad,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn category_labels_are_localized() {
        let en = Translations::builtin(Language::En);
        let fr = Translations::builtin(Language::Fr);
        assert_eq!(en.category_label(EnrolmentCategory::FtGrad), "FT Grad");
        assert_eq!(fr.category_label(EnrolmentCategory::FtGrad), "2e/3e cycle TP");
    }

    #[test]
    fn category_keys_resolve_to_category_labels() {
        let fr = Translations::builtin(Language::Fr);
        for category in EnrolmentCategory::iter() {
            assert_eq!(fr.text(category.as_ref()).unwrap(), fr.category_label(category));
        }
    }

    #[test]
    fn toggle_label_names_the_other_language() {
        assert_eq!(Translations::builtin(Language::En).language_toggle, "Français");
        assert_eq!(Translations::builtin(Language::Fr).language_toggle, "English");
    }

    #[test]
    fn unknown_key_is_missing_translation() {
        let en = Translations::builtin(Language::En);
        assert!(matches!(
            en.text("tooltipTitle"),
            Err(DashboardError::MissingTranslation { .. })
        ));
        assert_eq!(en.text_or_key("tooltipTitle"), "tooltipTitle");
    }

    #[test]
    fn lenient_map_substitutes_key_names() {
        let map: HashMap<String, String> =
            [("dashboardTitle".to_string(), "Titre".to_string())].into_iter().collect();
        let entry = Translations::from_map(Language::Fr, &map, false).unwrap();
        assert_eq!(entry.dashboard_title, "Titre");
        assert_eq!(entry.ft_grad, "ftGrad");
        assert_eq!(entry.placeholder_note, "placeholderNote");
    }

    #[test]
    fn strict_map_reports_first_missing_key() {
        let map = HashMap::new();
        match Translations::from_map(Language::En, &map, true) {
            Err(DashboardError::MissingTranslation { key, .. }) => assert_eq!(key, "dashboardTitle"),
            other => panic!("expected MissingTranslation, got {other:?}"),
        }
    }
}
