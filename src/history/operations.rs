// History cache file I/O

use super::{CacheLayout, HISTORY_CAP};
use super::pure::prepend_capped;

use log::{debug, warn};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load past selections, newest first.
///
/// A missing or malformed cache file is an empty history.
pub fn load(path: &Path) -> Vec<String> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            debug!("[fuzzel-launch] No history at {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    match serde_json::from_reader::<_, Vec<String>>(BufReader::new(file)) {
        Ok(history) => history,
        Err(e) => {
            warn!(
                "[fuzzel-launch] Ignoring malformed history {}: {}",
                path.display(),
                e
            );
            Vec::new()
        }
    }
}

/// Overwrite the cache file with `history`.
pub fn persist(path: &Path, history: &[String], layout: CacheLayout) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    match layout {
        CacheLayout::Compact => serde_json::to_writer(file, history)?,
        CacheLayout::Pretty => serde_json::to_writer_pretty(file, history)?,
    }
    Ok(())
}

/// Prepend `selection` to the stored history, trim it and write it back.
pub fn record(
    path: &Path,
    selection: &str,
    layout: CacheLayout,
) -> Result<Vec<String>, Box<dyn Error>> {
    let history = prepend_capped(load(path), selection, HISTORY_CAP);
    persist(path, &history, layout)?;
    debug!(
        "[fuzzel-launch] Recorded '{}' in {} ({} entries)",
        selection,
        path.display(),
        history.len()
    );
    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join("missing.json")).is_empty());
    }

    #[test]
    fn load_malformed_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(load(&path).is_empty());
    }

    #[test]
    fn load_wrong_shape_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(&path, r#"["ok", 3, null]"#).unwrap();
        assert!(load(&path).is_empty());
    }

    #[test]
    fn record_then_load_has_selection_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(&path, r#"["b", "a"]"#).unwrap();

        record(&path, "c", CacheLayout::Compact).unwrap();

        assert_eq!(load(&path), vec!["c", "b", "a"]);
    }

    #[test]
    fn record_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/cache.json");

        record(&path, "first", CacheLayout::Compact).unwrap();

        assert_eq!(load(&path), vec!["first"]);
    }

    #[test]
    fn record_replaces_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(&path, "garbage").unwrap();

        record(&path, "x", CacheLayout::Compact).unwrap();

        assert_eq!(load(&path), vec!["x"]);
    }

    #[test]
    fn record_21st_entry_drops_oldest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        for i in 0..HISTORY_CAP {
            record(&path, &format!("item{}", i), CacheLayout::Compact).unwrap();
        }
        assert_eq!(load(&path).len(), HISTORY_CAP);

        record(&path, "newest", CacheLayout::Compact).unwrap();

        let history = load(&path);
        assert_eq!(history.len(), HISTORY_CAP);
        assert_eq!(history[0], "newest");
        assert!(!history.contains(&"item0".to_string()));
        assert_eq!(history[HISTORY_CAP - 1], "item1");
    }

    #[test]
    fn compact_layout_is_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");

        record(&path, "Portal 2 [steam]", CacheLayout::Compact).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, r#"["Portal 2 [steam]"]"#);
    }

    #[test]
    fn pretty_layout_is_indented_and_readable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(&path, r#"["debian"]"#).unwrap();

        record(&path, "win11", CacheLayout::Pretty).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "[\n  \"win11\",\n  \"debian\"\n]");
        assert_eq!(load(&path), vec!["win11", "debian"]);
    }
}
