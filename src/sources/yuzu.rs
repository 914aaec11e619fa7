//! Yuzu (Switch) dump directory source

use super::{Catalog, Source, SourceError, is_hidden, name_from_path};

use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct YuzuSource {
    pub game_dir: PathBuf,
}

impl YuzuSource {
    pub fn new(game_dir: PathBuf) -> Self {
        Self { game_dir }
    }
}

impl Source for YuzuSource {
    fn name(&self) -> &str {
        "Yuzu"
    }

    fn tag(&self) -> &str {
        "yuzu"
    }

    /// Each `.nsp` file is a game; each sub-directory contributes its
    /// largest file. The directory itself must exist.
    fn enumerate(&self) -> Result<Catalog, SourceError> {
        if !self.game_dir.is_dir() {
            return Err(SourceError::MissingDirectory(self.game_dir.clone()));
        }

        let mut catalog = Catalog::new();
        for entry in WalkDir::new(&self.game_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(e))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("[fuzzel-launch] Skipping unreadable Yuzu entry: {}", e);
                    continue;
                }
            };
            let path = entry.path();

            let game = if is_nsp(path) {
                Some(path.to_path_buf())
            } else if entry.file_type().is_dir() {
                largest_file(path)
            } else {
                None
            };

            match game {
                Some(game) => {
                    catalog.insert(name_from_path(&game), launch_command(&game));
                }
                None => debug!("[fuzzel-launch] No Yuzu game in {}", path.display()),
            }
        }

        Ok(catalog)
    }
}

fn is_nsp(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().contains(".nsp"))
}

/// Largest regular file directly inside `dir`; ties go to the first name.
pub fn largest_file(dir: &Path) -> Option<PathBuf> {
    let mut best: Option<(u64, PathBuf)> = None;
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
        if best.as_ref().is_none_or(|(best_size, _)| size > *best_size) {
            best = Some((size, entry.into_path()));
        }
    }
    best.map(|(_, path)| path)
}

pub fn launch_command(game: &Path) -> Vec<String> {
    vec![
        "yuzu".to_string(),
        "-f".to_string(),
        "-g".to_string(),
        game.to_string_lossy().to_string(),
    ]
}
