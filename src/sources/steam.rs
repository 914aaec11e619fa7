//! Steam library source
//!
//! Uses the steamlocate crate to walk every Steam library folder and read
//! the installed app manifests.

use super::{Catalog, Source, SourceError};
use log::{debug, info};

/// Substrings (lowercase) marking runtimes and tools rather than games
const BLACKLIST: [&str; 2] = ["proton", "steam"];

pub struct SteamSource;

impl Source for SteamSource {
    fn name(&self) -> &str {
        "Steam"
    }

    fn tag(&self) -> &str {
        "steam"
    }

    fn enumerate(&self) -> Result<Catalog, SourceError> {
        let steam_dir = match steamlocate::SteamDir::locate() {
            Ok(dir) => dir,
            Err(e) => {
                info!("[fuzzel-launch] Steam installation not found: {}", e);
                return Ok(Catalog::new());
            }
        };

        Ok(catalog_from_steam_dir(&steam_dir))
    }
}

/// Collect launchable apps from every library of `steam_dir`.
///
/// Libraries and manifests that fail to parse are skipped.
pub fn catalog_from_steam_dir(steam_dir: &steamlocate::SteamDir) -> Catalog {
    let mut catalog = Catalog::new();

    let libraries = match steam_dir.libraries() {
        Ok(libraries) => libraries,
        Err(e) => {
            info!("[fuzzel-launch] Could not read Steam libraries: {}", e);
            return catalog;
        }
    };

    for library in libraries {
        let library = match library {
            Ok(lib) => lib,
            Err(e) => {
                debug!("[fuzzel-launch] Skipping Steam library: {}", e);
                continue;
            }
        };

        for app in library.apps() {
            match app {
                Ok(app) => {
                    if let Some((name, command)) = steam_entry(app.app_id, app.name.as_deref()) {
                        catalog.insert(name, command);
                    }
                }
                Err(e) => debug!("[fuzzel-launch] Skipping Steam manifest: {}", e),
            }
        }
    }

    catalog
}

/// Catalog entry for an installed app, `None` for nameless apps and tools.
pub fn steam_entry(app_id: u32, name: Option<&str>) -> Option<(String, Vec<String>)> {
    let name = name?.trim();
    if name.is_empty() || is_blacklisted(name) {
        return None;
    }
    Some((
        name.to_string(),
        vec!["steam".to_string(), format!("steam://rungameid/{}", app_id)],
    ))
}

pub fn is_blacklisted(name: &str) -> bool {
    let lower = name.to_lowercase();
    BLACKLIST.iter().any(|item| lower.contains(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_uses_rungameid_url() {
        let (name, command) = steam_entry(620, Some("Portal 2")).unwrap();
        assert_eq!(name, "Portal 2");
        assert_eq!(command, vec!["steam", "steam://rungameid/620"]);
    }

    #[test]
    fn entry_skips_nameless_apps() {
        assert!(steam_entry(1, None).is_none());
        assert!(steam_entry(1, Some("  ")).is_none());
    }

    #[test]
    fn entry_skips_proton_and_runtimes() {
        assert!(steam_entry(1493710, Some("Proton Experimental")).is_none());
        assert!(steam_entry(1628350, Some("Steam Linux Runtime 3.0 (sniper)")).is_none());
        assert!(steam_entry(228980, Some("Steamworks Common Redistributables")).is_none());
    }

    #[test]
    fn blacklist_is_case_insensitive() {
        assert!(is_blacklisted("PROTON 9.0"));
        assert!(!is_blacklisted("Hollow Knight"));
    }
}
