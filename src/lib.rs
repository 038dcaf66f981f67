// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod i18n;
pub mod models;
pub mod ui;

// Re-export commonly used types
pub use data::Dataset;
pub use domain::{EnrolmentCategory, Language, UniversityRecord};
pub use engine::{DashboardEngine, SelectionState, UiMessage};
pub use error::DashboardError;
pub use i18n::{LocalizationTable, Translations};
pub use models::{DashboardView, build_bar_series, build_doughnut_slices};
pub use ui::EnrolmentDashboardApp;

use std::path::PathBuf;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file with an array of university records (defaults to the built-in Fall 2024 table)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// JSON file with translation overrides, keyed by language code then string key
    #[arg(long)]
    pub translations: Option<PathBuf>,

    /// Language to start in (en, fr)
    #[arg(long)]
    pub lang: Option<String>,
}

/// Builds the engine from the command line: dataset, translations, starting language.
pub fn build_engine(args: &Cli) -> Result<DashboardEngine, DashboardError> {
    let dataset = match &args.data {
        Some(path) => Dataset::load_json(path)?,
        None => Dataset::builtin(),
    };

    let localization = match &args.translations {
        Some(path) => LocalizationTable::load_json(path)?,
        None => LocalizationTable::builtin(),
    };

    let mut engine = DashboardEngine::new(dataset, localization);
    if let Some(code) = &args.lang {
        engine.set_language(code)?;
    }
    Ok(engine)
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, engine: DashboardEngine) -> Box<dyn eframe::App> {
    Box::new(EnrolmentDashboardApp::new(cc, engine))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cli_builds_builtin_engine() {
        let engine = build_engine(&Cli::default()).unwrap();
        assert_eq!(engine.dataset.len(), 4);
        assert_eq!(engine.language(), Language::En);
    }

    #[test]
    fn lang_flag_sets_starting_language() {
        let args = Cli::parse_from(["enrolment-dashboard", "--lang", "fr"]);
        let engine = build_engine(&args).unwrap();
        assert_eq!(engine.language(), Language::Fr);
    }

    #[test]
    fn unsupported_lang_flag_is_invalid_argument() {
        let args = Cli::parse_from(["enrolment-dashboard", "--lang", "xx"]);
        assert!(matches!(
            build_engine(&args),
            Err(DashboardError::InvalidArgument(_))
        ));
    }

    #[test]
    fn missing_data_file_is_io_error() {
        let args = Cli::parse_from(["enrolment-dashboard", "--data", "/nonexistent/universities.json"]);
        assert!(matches!(build_engine(&args), Err(DashboardError::Io(_))));
    }
}
