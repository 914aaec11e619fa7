//! Pure functions module (no I/O)

pub mod command;

pub use command::{build_command, format_command};
