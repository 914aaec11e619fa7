//! Operations module (atomic side effects)

pub mod spawn;

pub use spawn::spawn_detached;
