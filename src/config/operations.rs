//! Operations module (config file I/O)

pub mod io;

pub use io::{Loaded, load_or_create};
