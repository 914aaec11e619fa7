//! Catalog gathering pipeline

use crate::config::SourceConfig;
use crate::sources::{Catalog, SourceError};

use log::{info, warn};

/// Enumerate every enabled source and merge the results in order.
///
/// Configuration errors skip the affected source; any other source error
/// aborts the run.
pub fn gather_catalog(
    sources: Vec<Result<SourceConfig, SourceError>>,
) -> Result<Catalog, SourceError> {
    let mut catalog = Catalog::new();

    for source_config in sources {
        let source_config = match source_config {
            Ok(config) => config,
            Err(e) if e.is_config() => {
                warn!(
                    "[fuzzel-launch] Skipping source due to a configuration error: {}",
                    e
                );
                continue;
            }
            Err(e) => return Err(e),
        };

        let source = source_config.as_source();
        match source.enumerate() {
            Ok(found) => {
                info!(
                    "[fuzzel-launch] {}: {} games",
                    source.name(),
                    found.len()
                );
                catalog.merge_tagged(found, source.tag());
            }
            Err(e) if e.is_config() => {
                warn!(
                    "[fuzzel-launch] Skipping {} due to a configuration error: {}",
                    source.name(),
                    e
                );
            }
            Err(e) => return Err(e),
        }
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn game_config(json: &str) -> GameConfig {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn merges_in_config_order_with_tags() {
        let cfg = game_config(
            r#"{
                "Custom": {"enable": true, "games": {"Minecraft": ["prismlauncher"]}},
                "Yuzu": {"enable": false, "path": "/definitely/missing"}
            }"#,
        );
        let catalog = gather_catalog(cfg.enabled_sources()).unwrap();
        assert_eq!(catalog.names(), vec!["Minecraft [custom]"]);
    }

    #[test]
    fn config_errors_skip_only_that_source() {
        let cfg = game_config(
            r#"{
                "Heroic": {"enable": true},
                "Custom": {"enable": true, "games": {"Doom": ["gzdoom"]}}
            }"#,
        );
        let catalog = gather_catalog(cfg.enabled_sources()).unwrap();
        assert_eq!(catalog.names(), vec!["Doom [custom]"]);
    }

    #[test]
    fn missing_yuzu_directory_fails_run() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nsp");
        let cfg = game_config(&format!(
            r#"{{
                "Custom": {{"enable": true, "games": {{"Doom": ["gzdoom"]}}}},
                "Yuzu": {{"enable": true, "path": "{}"}}
            }}"#,
            missing.display()
        ));
        let err = gather_catalog(cfg.enabled_sources()).unwrap_err();
        assert!(matches!(err, SourceError::MissingDirectory(_)));
    }

    #[test]
    fn duplicate_custom_keys_last_wins() {
        let cfg = game_config(
            r#"{"custom": {"enable": true, "games": {"Doom": ["old"], "Doom": ["new"]}}}"#,
        );
        let catalog = gather_catalog(cfg.enabled_sources()).unwrap();
        assert_eq!(catalog.get("Doom [custom]").unwrap(), ["new".to_string()].as_slice());
    }
}
