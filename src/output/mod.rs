//! Terminal output formatting
//!
//! Player-facing message text and pretty-printing for command results.

pub mod display;
pub mod formatters;

pub use display::print_check_report;
