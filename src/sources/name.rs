// Pure display-name helpers (no I/O)

use std::path::Path;
use walkdir::DirEntry;

/// Dot-files below the scan root, e.g. `.directory` or `.DS_Store`
///
/// The root itself is never hidden so scans of `~/.local/...` still work.
pub fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Turn a ROM or dump file name into a display name.
///
/// `Super_Mario_World (USA) [!].sfc` -> `Super Mario World`
pub fn name_from_path(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let stem = file_name.split('.').next().unwrap_or_default();
    let stem = stem.split('[').next().unwrap_or_default();
    let stem = stem.split('(').next().unwrap_or_default();

    stem.replace('_', " ").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_region_and_extension() {
        let path = Path::new("/roms/snes/Super_Mario_World (USA).sfc");
        assert_eq!(name_from_path(path), "Super Mario World");
    }

    #[test]
    fn strips_brackets_before_parens() {
        let path = Path::new("Zelda [b1] (Europe).zip");
        assert_eq!(name_from_path(path), "Zelda");
    }

    #[test]
    fn cuts_at_first_dot() {
        let path = Path::new("/nsp/Game.v1.2.nsp");
        assert_eq!(name_from_path(path), "Game");
    }

    #[test]
    fn plain_name_unchanged() {
        assert_eq!(name_from_path(Path::new("Celeste")), "Celeste");
    }

    #[test]
    fn trailing_underscore_trimmed() {
        assert_eq!(name_from_path(Path::new("Metroid_Prime_.iso")), "Metroid Prime");
    }

    #[test]
    fn empty_path() {
        assert_eq!(name_from_path(Path::new("")), "");
    }
}
