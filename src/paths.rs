use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

pub static PATH_HOME: LazyLock<PathBuf> = LazyLock::new(|| {
    env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
});

pub static PATH_CONFIG: LazyLock<PathBuf> = LazyLock::new(|| {
    if let Ok(xdg_config_home) = env::var("XDG_CONFIG_HOME")
        && !xdg_config_home.is_empty()
    {
        return PathBuf::from(xdg_config_home);
    }
    PATH_HOME.join(".config")
});

pub static PATH_CACHE: LazyLock<PathBuf> = LazyLock::new(|| {
    if let Ok(xdg_cache_home) = env::var("XDG_CACHE_HOME")
        && !xdg_cache_home.is_empty()
    {
        return PathBuf::from(xdg_cache_home);
    }
    PATH_HOME.join(".cache")
});

/// Directory holding the per-menu JSON configs
pub static PATH_FUZZEL_CONFIG: LazyLock<PathBuf> = LazyLock::new(|| PATH_CONFIG.join("fuzzel"));

pub static PATH_GAME_CONFIG: LazyLock<PathBuf> =
    LazyLock::new(|| PATH_FUZZEL_CONFIG.join("fuzzel-game.json"));

pub static PATH_SSH_CONFIG: LazyLock<PathBuf> =
    LazyLock::new(|| PATH_FUZZEL_CONFIG.join("fuzzel-ssh.json"));

pub static PATH_GAME_CACHE: LazyLock<PathBuf> =
    LazyLock::new(|| PATH_CACHE.join("fuzzel-game.json"));

pub static PATH_VM_CACHE: LazyLock<PathBuf> = LazyLock::new(|| PATH_CACHE.join("fuzzel-vm.json"));

/// Heroic's cached store libraries (`*_library.json`)
pub static PATH_HEROIC_STORE_CACHE: LazyLock<PathBuf> =
    LazyLock::new(|| PATH_CONFIG.join("heroic/store_cache"));
