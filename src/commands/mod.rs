//! Command implementations

pub mod check;
pub mod simple;

pub use check::{CheckConfig, CheckReport, Violation, ViolationKind, run_check};
pub use simple::{run_simple, run_simple_with};
