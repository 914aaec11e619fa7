//! Game menu pipeline: gather -> merge -> rank -> prompt -> record -> execute

use crate::config::{GameConfig, Loaded, load_or_create};
use crate::history::{self, CacheLayout};
use crate::launch::Outcome;
use crate::launch::operations::spawn_detached;
use crate::picker::Picker;

use super::gather::gather_catalog;

use log::{info, warn};
use std::error::Error;
use std::path::Path;

/// Run the game menu once
pub fn run_game_menu(
    picker: &Picker,
    config_path: &Path,
    cache_path: &Path,
) -> Result<Outcome, Box<dyn Error>> {
    let config = match load_or_create::<GameConfig>(config_path)? {
        Loaded::Existing(config) => config,
        Loaded::Created(path) => {
            let message = format!("Config created, please edit {}", path.display());
            warn!("[fuzzel-launch] {}", message);
            picker.notice(&message)?;
            return Ok(Outcome::ConfigCreated);
        }
    };

    let catalog = gather_catalog(config.enabled_sources())?;
    if catalog.is_empty() {
        warn!("[fuzzel-launch] No games found in any enabled source");
    } else {
        info!("[fuzzel-launch] {} games in catalog", catalog.len());
    }

    let ranked = history::rank(&catalog.names(), &history::load(cache_path));

    let Some(selection) = picker.select(&ranked, "")? else {
        return Ok(Outcome::Cancelled);
    };

    let Some(command) = catalog.get(&selection) else {
        return Err(format!("'{}' is not a known game", selection).into());
    };

    history::record(cache_path, &selection, CacheLayout::Compact)?;
    spawn_detached(command)?;

    Ok(Outcome::Done)
}
