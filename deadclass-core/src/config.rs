//! Configuration loading from deadclass.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Main configuration structure for deadclass.toml.
#[derive(Debug, Deserialize, Default)]
pub struct DeadclassConfig {
    /// Class names or patterns to exclude from the dead list
    /// (e.g. classes added at runtime by scripts).
    pub ignore: Option<Vec<String>>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

/// Loads configuration from deadclass.toml if it exists.
pub fn load_config(root: &Path) -> Result<Option<DeadclassConfig>> {
    let path = root.join("deadclass.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let cfg = toml::from_str(&content).context("Invalid deadclass.toml")?;
    Ok(Some(cfg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_none() {
        let dir = std::env::temp_dir().join(format!("deadclass_cfg_none_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        assert!(load_config(&dir).unwrap().is_none());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_parse_config() {
        let dir = std::env::temp_dir().join(format!("deadclass_cfg_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("deadclass.toml"),
            "ignore = [\"js-*\"]\n[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let cfg = load_config(&dir).unwrap().unwrap();
        assert_eq!(cfg.ignore.unwrap(), vec!["js-*".to_string()]);
        assert_eq!(cfg.output.unwrap().format.unwrap(), "json");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_invalid_config_errors() {
        let dir = std::env::temp_dir().join(format!("deadclass_cfg_bad_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("deadclass.toml"), "ignore = not-a-list").unwrap();

        assert!(load_config(&dir).is_err());

        fs::remove_dir_all(&dir).ok();
    }
}
