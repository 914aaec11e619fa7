use crate::sources::{
    CustomSource, HeroicSource, RetroArchSource, Source, SourceError, SteamSource, YuzuSource,
};
use crate::util::expand_path;

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::collections::HashMap;

/// Game launcher configuration, keyed by source name.
///
/// Key order is preserved and decides merge order: when two sources produce
/// the same display name, the later one wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameConfig {
    pub sources: Map<String, Value>,
}

impl Default for GameConfig {
    fn default() -> Self {
        let value = json!({
            "Steam": {"enable": true},
            "Heroic": {"enable": true, "path": "~/Games/Heroic"},
            "Yuzu": {"enable": false, "path": "/mnt/server2/Games/NSP"},
            "RetroArch": {
                "enable": true,
                "cores": {
                    "wii": "/usr/lib/libretro/dolphin_libretro.so",
                    "snes": "/usr/lib/libretro/snes9x_libretro.so"
                },
                "path": "~/Games/ROMs"
            },
            "Custom": {
                "enable": true,
                "games": {
                    "Genshin Impact": ["an-anime-game-launcher", "--run-game"],
                    "Honkai Star Rail": ["the-honkers-railway-launcher", "--run-game"],
                    "Minecraft": ["prismlauncher", "--launch", "1.20.4(1)"]
                }
            }
        });

        match value {
            Value::Object(sources) => GameConfig { sources },
            _ => GameConfig { sources: Map::new() },
        }
    }
}

impl GameConfig {
    /// Parsed settings of every enabled source, in config order.
    ///
    /// Entries with configuration errors come back as `Err` so the caller
    /// can report and skip them.
    pub fn enabled_sources(&self) -> Vec<Result<SourceConfig, SourceError>> {
        self.sources
            .iter()
            .filter_map(|(name, value)| SourceConfig::from_entry(name, value).transpose())
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct SourceToggle {
    enable: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PathSettings {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RetroArchSettings {
    pub path: String,
    pub cores: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CustomSettings {
    pub games: Map<String, Value>,
}

impl CustomSettings {
    /// Games whose command is a non-empty list of strings; others are skipped.
    pub fn commands(&self) -> Vec<(String, Vec<String>)> {
        let mut out = Vec::new();
        for (name, value) in &self.games {
            match serde_json::from_value::<Vec<String>>(value.clone()) {
                Ok(command) if !command.is_empty() => out.push((name.clone(), command)),
                _ => warn!(
                    "[fuzzel-launch] Skipping custom game '{}': command must be a list of strings",
                    name
                ),
            }
        }
        out
    }
}

/// Settings of one enabled source
#[derive(Debug, Clone, PartialEq)]
pub enum SourceConfig {
    Steam,
    Heroic(PathSettings),
    Yuzu(PathSettings),
    RetroArch(RetroArchSettings),
    Custom(CustomSettings),
}

fn parse_settings<T: DeserializeOwned>(name: &str, value: &Value) -> Result<T, SourceError> {
    serde_json::from_value(value.clone()).map_err(|e| SourceError::config(name, e))
}

impl SourceConfig {
    /// Parse one config entry. Returns `Ok(None)` for disabled sources.
    pub fn from_entry(name: &str, value: &Value) -> Result<Option<Self>, SourceError> {
        let toggle: SourceToggle = parse_settings(name, value)?;
        if !toggle.enable {
            return Ok(None);
        }

        let config = match name.to_lowercase().as_str() {
            "steam" => SourceConfig::Steam,
            "heroic" => SourceConfig::Heroic(parse_settings(name, value)?),
            "yuzu" => SourceConfig::Yuzu(parse_settings(name, value)?),
            "retroarch" => SourceConfig::RetroArch(parse_settings(name, value)?),
            "custom" => SourceConfig::Custom(parse_settings(name, value)?),
            _ => return Err(SourceError::config(name, "unknown source")),
        };
        Ok(Some(config))
    }

    /// Convert source settings to a trait object
    pub fn as_source(&self) -> Box<dyn Source> {
        match self {
            SourceConfig::Steam => Box::new(SteamSource),
            SourceConfig::Heroic(settings) => {
                Box::new(HeroicSource::new(expand_path(&settings.path)))
            }
            SourceConfig::Yuzu(settings) => Box::new(YuzuSource::new(expand_path(&settings.path))),
            SourceConfig::RetroArch(settings) => Box::new(RetroArchSource::new(
                expand_path(&settings.path),
                settings.cores.clone(),
            )),
            SourceConfig::Custom(settings) => Box::new(CustomSource::new(settings.commands())),
        }
    }
}

/// SSH hosts, nickname -> `user@host`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SshConfig {
    pub hosts: Map<String, Value>,
}

impl Default for SshConfig {
    fn default() -> Self {
        let mut hosts = Map::new();
        hosts.insert("nickname".to_string(), Value::from("user@IP"));
        SshConfig { hosts }
    }
}

impl SshConfig {
    pub fn nicknames(&self) -> Vec<String> {
        self.hosts.keys().cloned().collect()
    }

    /// Connection target for a nickname, `None` if unknown or not a string
    pub fn target(&self, nickname: &str) -> Option<&str> {
        self.hosts.get(nickname).and_then(Value::as_str)
    }
}
