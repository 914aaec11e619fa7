//! Pipelines module (orchestration)

pub mod game_menu;
pub mod gather;

pub use game_menu::run_game_menu;
