//! Configuration module for the enrolment dashboard.

mod debug; // Private: use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod plot;

// Re-export commonly used items
pub use plot::{CHART_CONFIG, ChartConfig};
