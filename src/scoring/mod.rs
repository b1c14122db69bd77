//! Point breakdown for a single click

pub mod calculator;
pub mod constants;

pub use calculator::{calculate, ScoreBreakdown};
