//! Frequency-ranked selection history
//!
//! A small JSON list of past selections (newest first, at most
//! [`HISTORY_CAP`] entries) used to float frequently used items to the top
//! of a menu. Duplicates are kept since they carry the frequency.
//!
//! ## Module Structure
//! - `pure.rs`: ranking and list manipulation (no I/O)
//! - `operations.rs`: loading and persisting the cache file

mod operations;
mod pure;

pub use operations::{load, record};
pub use pure::{promote, rank};

/// Maximum number of remembered selections
pub const HISTORY_CAP: usize = 20;

/// On-disk layout of a cache file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheLayout {
    /// Single-line JSON array
    Compact,
    /// Indented JSON array, one entry per line
    Pretty,
}
