//! Heroic Games Launcher source
//!
//! Heroic keeps one `*_library.json` per store in its store cache. A game
//! from those libraries counts as installed when its folder under the
//! install directory holds a Windows executable.

use super::{Catalog, Source, SourceError, is_hidden};
use crate::paths::PATH_HEROIC_STORE_CACHE;

use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Deserialize)]
struct HeroicLibrary {
    #[serde(default)]
    library: Vec<serde_json::Value>,
}

/// One game from a Heroic store library
#[derive(Debug, Deserialize)]
pub struct HeroicGame {
    pub title: String,
    pub app_name: String,
    pub runner: String,
    pub folder_name: String,
}

impl HeroicGame {
    pub fn launch_command(&self) -> Vec<String> {
        vec![
            "xdg-open".to_string(),
            format!("heroic://launch/{}/{}", self.runner, self.app_name),
        ]
    }
}

pub struct HeroicSource {
    pub install_dir: PathBuf,
    pub store_cache: PathBuf,
}

impl HeroicSource {
    pub fn new(install_dir: PathBuf) -> Self {
        Self {
            install_dir,
            store_cache: PATH_HEROIC_STORE_CACHE.clone(),
        }
    }
}

impl Source for HeroicSource {
    fn name(&self) -> &str {
        "Heroic"
    }

    fn tag(&self) -> &str {
        "heroic"
    }

    fn enumerate(&self) -> Result<Catalog, SourceError> {
        let installed = installed_folders(&self.install_dir);
        let mut catalog = Catalog::new();

        for library_path in library_files(&self.store_cache) {
            let contents = match std::fs::read_to_string(&library_path) {
                Ok(contents) => contents,
                Err(e) => {
                    warn!(
                        "[fuzzel-launch] Could not read {}: {}",
                        library_path.display(),
                        e
                    );
                    continue;
                }
            };

            for game in parse_library(&contents) {
                if installed.contains(&game.folder_name) {
                    catalog.insert(game.title.clone(), game.launch_command());
                }
            }
        }

        Ok(catalog)
    }
}

/// Folder names directly under `install_dir` that contain an `.exe`.
pub fn installed_folders(install_dir: &Path) -> HashSet<String> {
    WalkDir::new(install_dir)
        .min_depth(2)
        .max_depth(2)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "exe"))
        .filter_map(|e| {
            e.path()
                .parent()
                .and_then(|parent| parent.file_name())
                .map(|name| name.to_string_lossy().to_string())
        })
        .collect()
}

/// `*_library.json` files in the store cache, sorted by path.
pub fn library_files(store_cache: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(store_cache) else {
        debug!(
            "[fuzzel-launch] No Heroic store cache at {}",
            store_cache.display()
        );
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|path| {
            path.file_name()
                .is_some_and(|name| name.to_string_lossy().ends_with("_library.json"))
        })
        .collect();
    files.sort();
    files
}

/// Games listed in a library file; entries missing keys are skipped.
pub fn parse_library(contents: &str) -> Vec<HeroicGame> {
    let library: HeroicLibrary = match serde_json::from_str(contents) {
        Ok(library) => library,
        Err(e) => {
            warn!("[fuzzel-launch] Malformed Heroic library: {}", e);
            return Vec::new();
        }
    };

    library
        .library
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<HeroicGame>(entry) {
            Ok(game) => Some(game),
            Err(e) => {
                debug!("[fuzzel-launch] Skipping Heroic entry: {}", e);
                None
            }
        })
        .collect()
}
