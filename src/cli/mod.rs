//! Command-line surface: argument parsing and display constants.

pub mod args;
pub mod constants;
