use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a game source
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source's config entry is missing keys or has the wrong shape
    #[error("{source_name}: {detail}")]
    Config { source_name: String, detail: String },

    /// A directory the source cannot work without is absent
    #[error("Path does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),
}

impl SourceError {
    pub fn config(source_name: &str, detail: impl ToString) -> Self {
        SourceError::Config {
            source_name: source_name.to_string(),
            detail: detail.to_string(),
        }
    }

    /// Configuration problems only disable the affected source
    pub fn is_config(&self) -> bool {
        matches!(self, SourceError::Config { .. })
    }
}
