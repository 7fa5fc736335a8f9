use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, VersionError};

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "clientversion.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".clientversion.toml";

/// Represents the complete configuration for client-version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Information about the locally installed client.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ClientConfig {
    /// Version the local client reports; `None` when it must come from the command line
    #[serde(default)]
    pub current_version: Option<String>,
}

/// Controls how advertised versions are judged.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Count dev/alpha/beta/rc versions as available updates
    #[serde(default)]
    pub include_prereleases: bool,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `clientversion.toml` in current directory
/// 3. `.clientversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| VersionError::config(e.to_string()))
}
