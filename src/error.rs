use crate::domain::Language;

/// Error types for dashboard operations
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// An input outside the closed set the operation accepts (e.g. an unsupported language code)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// A university name that is not part of the dataset
    #[error("No university named '{0}' in the dataset")]
    NotFound(String),
    /// A display string absent for the active language
    #[error("Missing translation for key '{key}' in language '{language}'")]
    MissingTranslation { language: Language, key: String },
    /// A dataset that breaks the non-empty/unique-name rules
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
