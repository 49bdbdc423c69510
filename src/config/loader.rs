use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::types::Config;

const CONFIG_DIR: &str = "payguide";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus a message for the user if something was off
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load_config() -> ConfigResult {
    let Some(path) = config_path() else {
        return ConfigResult::default();
    };

    load_config_from_path(&path)
}

/// A missing file is not an error; an unreadable one is reported
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return ConfigResult::default(),
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Could not read {}: {}", path.display(), e)),
            };
        }
    };

    log::debug!("Loaded config from {}", path.display());
    parse_config(&contents)
}

pub fn parse_config(content: &str) -> ConfigResult {
    match toml::from_str::<Config>(content) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Invalid config, using defaults: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config file, using defaults: {}", e.message())),
            }
        }
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
