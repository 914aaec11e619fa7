//! Launch module - the game menu dispatcher
//!
//! This module provides:
//! - Merging every enabled source into one catalog
//! - Frequency ranking and the picker round-trip
//! - Spawning the chosen command
//!
//! ## Module Structure
//! - `types.rs`: Menu outcome shared by all menus
//! - `pure/`: Pure functions (command building and formatting)
//! - `operations/`: Atomic side effects (spawning)
//! - `pipelines/`: High-level orchestration (gather, game_menu)

mod operations;
mod pipelines;
mod pure;
mod types;

// Re-export public API
pub use operations::spawn_detached;
pub use pipelines::run_game_menu;
pub use types::Outcome;
