pub mod operations;
pub mod types;

// Re-export types
pub use types::{GameConfig, SourceConfig, SshConfig};

// Re-export operations
pub use operations::{Loaded, load_or_create};
