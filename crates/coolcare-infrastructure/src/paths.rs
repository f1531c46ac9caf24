//! Platform path resolution for coolcare configuration files.
//!
//! ```text
//! ~/.config/coolcare/          # Config directory (platform default)
//! └── config.toml              # Application configuration
//! ```

use coolcare_core::error::{CoolcareError, Result};
use std::path::PathBuf;

const APP_DIR: &str = "coolcare";
const CONFIG_FILE: &str = "config.toml";

pub struct CoolcarePaths;

impl CoolcarePaths {
    /// Returns the coolcare configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/coolcare/`)
    /// - `Err(CoolcareError::Config)`: The platform has no config directory
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| CoolcareError::config("Cannot find the user configuration directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }
}
