//! Game sources - WHERE launchable games come from
//!
//! Each source enumerates one launcher or library into a [`Catalog`] of
//! display name -> command line:
//! - Steam: installed apps from every Steam library (via steamlocate)
//! - Heroic: Epic/GOG games installed through Heroic
//! - Yuzu: Switch dumps in a directory
//! - RetroArch: ROMs sorted into per-system directories
//! - Custom: explicit commands from the config file

mod catalog;
mod custom;
mod heroic;
mod name;
mod retroarch;
mod steam;
mod types;
mod yuzu;

pub use catalog::Catalog;
pub use custom::CustomSource;
pub use heroic::HeroicSource;
pub use name::{is_hidden, name_from_path};
pub use retroarch::RetroArchSource;
pub use steam::SteamSource;
pub use types::SourceError;
pub use yuzu::YuzuSource;

/// Source trait - one launcher or game library
pub trait Source {
    /// Human readable name used in diagnostics
    fn name(&self) -> &str;

    /// Short tag appended to display names, e.g. `steam` in `Portal 2 [steam]`
    fn tag(&self) -> &str;

    /// Collect every launchable game this source currently knows about
    fn enumerate(&self) -> Result<Catalog, SourceError>;
}
