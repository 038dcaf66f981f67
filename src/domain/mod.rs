pub mod language;
pub mod university;

// Re-export key components
pub use language::Language;
pub use university::{EnrolmentCategory, UniversityRecord};
