use crate::domain::VersionOptions;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "mcgitversion.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE_NAME: &str = ".mcgitversion.toml";

/// Represents the complete configuration for mc-git-version.
///
/// ```toml
/// platform_version = "1.12.2-14.23.5.2847"
///
/// [version]
/// version_suffix = "-beta"
/// snapshot = true
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Full platform identifier; only the part before the first `-` is used
    #[serde(default)]
    pub platform_version: Option<String>,

    #[serde(default)]
    pub version: VersionOptions,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `mcgitversion.toml` in current directory
/// 3. `.mcgitversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);

    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if local.exists() {
        fs::read_to_string(local)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE_NAME);
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

/// Parse configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}
