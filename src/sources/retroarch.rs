//! RetroArch ROM directory source
//!
//! ROMs live in `<rom_dir>/<system>/<file>`; the system directory name picks
//! the libretro core from the config's `cores` map.

use super::{Catalog, Source, SourceError, is_hidden, name_from_path};

use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct RetroArchSource {
    pub rom_dir: PathBuf,
    pub cores: HashMap<String, String>,
}

impl RetroArchSource {
    pub fn new(rom_dir: PathBuf, cores: HashMap<String, String>) -> Self {
        Self { rom_dir, cores }
    }
}

impl Source for RetroArchSource {
    fn name(&self) -> &str {
        "RetroArch"
    }

    fn tag(&self) -> &str {
        "retroarch"
    }

    fn enumerate(&self) -> Result<Catalog, SourceError> {
        let mut catalog = Catalog::new();

        for entry in WalkDir::new(&self.rom_dir)
            .min_depth(2)
            .max_depth(2)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(e))
            .filter_map(|e| e.ok())
        {
            let rom = entry.path();
            if !is_rom(rom) {
                continue;
            }

            let Some(system) = system_of(rom) else {
                continue;
            };
            let Some(core) = self.cores.get(&system) else {
                debug!(
                    "[fuzzel-launch] No RetroArch core for '{}', skipping {}",
                    system,
                    rom.display()
                );
                continue;
            };

            catalog.insert(name_from_path(rom), launch_command(core, rom));
        }

        Ok(catalog)
    }
}

/// Files with an extension, excluding `.txt` notes
fn is_rom(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();
    name.contains('.') && !name.contains(".txt")
}

/// Name of the directory a ROM sits in
fn system_of(rom: &Path) -> Option<String> {
    rom.parent()
        .and_then(|dir| dir.file_name())
        .map(|name| name.to_string_lossy().to_string())
}

pub fn launch_command(core: &str, rom: &Path) -> Vec<String> {
    vec![
        "retroarch".to_string(),
        "-f".to_string(),
        "-L".to_string(),
        core.to_string(),
        rom.to_string_lossy().to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn cores() -> HashMap<String, String> {
        HashMap::from([(
            "snes".to_string(),
            "/usr/lib/libretro/snes9x_libretro.so".to_string(),
        )])
    }

    #[test]
    fn roms_get_their_system_core() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("snes")).unwrap();
        fs::write(dir.path().join("snes/Super_Metroid (USA).sfc"), "").unwrap();
        fs::write(dir.path().join("snes/readme.txt"), "").unwrap();

        let source = RetroArchSource::new(dir.path().to_path_buf(), cores());
        let catalog = source.enumerate().unwrap();

        assert_eq!(catalog.names(), vec!["Super Metroid"]);
        let rom = dir.path().join("snes/Super_Metroid (USA).sfc");
        assert_eq!(
            catalog.get("Super Metroid").unwrap(),
            launch_command("/usr/lib/libretro/snes9x_libretro.so", &rom).as_slice()
        );
    }

    #[test]
    fn systems_without_core_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("gba")).unwrap();
        fs::write(dir.path().join("gba/Metroid_Fusion.gba"), "").unwrap();
        fs::create_dir_all(dir.path().join("snes")).unwrap();
        fs::write(dir.path().join("snes/F-Zero.sfc"), "").unwrap();

        let source = RetroArchSource::new(dir.path().to_path_buf(), cores());
        let catalog = source.enumerate().unwrap();

        assert_eq!(catalog.names(), vec!["F-Zero"]);
    }

    #[test]
    fn files_without_extension_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("snes")).unwrap();
        fs::write(dir.path().join("snes/LICENSE"), "").unwrap();
        fs::write(dir.path().join("top_level.sfc"), "").unwrap();

        let source = RetroArchSource::new(dir.path().to_path_buf(), cores());
        assert!(source.enumerate().unwrap().is_empty());
    }

    #[test]
    fn hidden_files_and_systems_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("snes")).unwrap();
        fs::write(dir.path().join("snes/F-Zero.sfc"), "").unwrap();
        fs::write(dir.path().join("snes/.directory"), "").unwrap();
        fs::write(dir.path().join("snes/.DS_Store"), "").unwrap();
        fs::create_dir_all(dir.path().join(".snes")).unwrap();
        fs::write(dir.path().join(".snes/Secret.sfc"), "").unwrap();

        let mut cores = cores();
        cores.insert(".snes".to_string(), "/usr/lib/libretro/snes9x_libretro.so".to_string());
        let source = RetroArchSource::new(dir.path().to_path_buf(), cores);
        let mut catalog = Catalog::new();
        catalog.merge_tagged(source.enumerate().unwrap(), "retroarch");

        assert_eq!(catalog.names(), vec!["F-Zero [retroarch]"]);
    }

    #[test]
    fn missing_rom_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let source = RetroArchSource::new(dir.path().join("missing"), cores());
        assert!(source.enumerate().unwrap().is_empty());
    }
}
