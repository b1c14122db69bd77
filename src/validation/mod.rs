//! Click validation: evaluate, score and describe

pub mod messages;
pub mod orchestrator;

pub use messages::{feedback, format_distance};
pub use orchestrator::{validate, ValidationResult};
