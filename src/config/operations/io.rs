use log::{debug, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Result of reading a config file that may not exist yet
#[derive(Debug)]
pub enum Loaded<T> {
    Existing(T),
    /// The file was absent; defaults were written to this path
    Created(PathBuf),
}

/// Read the JSON config at `path`, or write `T::default()` there if absent.
///
/// A config that exists but fails to parse is an error.
pub fn load_or_create<T>(path: &Path) -> Result<Loaded<T>, Box<dyn Error>>
where
    T: DeserializeOwned + Serialize + Default,
{
    if path.exists() {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;
        debug!("[fuzzel-launch] Loaded config {}", path.display());
        return Ok(Loaded::Existing(config));
    }

    save_cfg(path, &T::default())?;
    info!("[fuzzel-launch] Wrote default config to {}", path.display());
    Ok(Loaded::Created(path.to_path_buf()))
}

pub fn save_cfg<T: Serialize>(path: &Path, config: &T) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, SshConfig};

    #[test]
    fn missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fuzzel/fuzzel-game.json");

        let loaded = load_or_create::<GameConfig>(&path).unwrap();

        assert!(matches!(loaded, Loaded::Created(ref p) if p == &path));
        let written: GameConfig =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, GameConfig::default());
    }

    #[test]
    fn existing_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fuzzel-ssh.json");
        std::fs::write(&path, r#"{"nas": "admin@192.168.1.10"}"#).unwrap();

        let Loaded::Existing(cfg) = load_or_create::<SshConfig>(&path).unwrap() else {
            panic!("expected existing config");
        };
        assert_eq!(cfg.target("nas"), Some("admin@192.168.1.10"));
    }

    #[test]
    fn malformed_file_is_error_and_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fuzzel-game.json");
        std::fs::write(&path, "{oops").unwrap();

        assert!(load_or_create::<GameConfig>(&path).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{oops");
    }
}
