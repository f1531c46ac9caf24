//! Configuration service implementation.
//!
//! Loads [`AppConfig`] from `config.toml` (by default
//! `~/.config/coolcare/config.toml`), layers `COOLCARE_*` environment
//! overrides on top and caches the result.

use crate::paths::CoolcarePaths;
use coolcare_core::config::AppConfig;
use coolcare_core::error::{CoolcareError, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub const ENV_API_BASE_URL: &str = "COOLCARE_API_BASE_URL";
pub const ENV_CHECKOUT_KEY_ID: &str = "COOLCARE_CHECKOUT_KEY_ID";
pub const ENV_ADVANCE_AMOUNT_MINOR: &str = "COOLCARE_ADVANCE_AMOUNT_MINOR";
pub const ENV_LOG_LEVEL: &str = "COOLCARE_LOG_LEVEL";

/// Configuration service that loads and caches the application configuration.
///
/// A missing file is not an error: defaults are used instead. A file that
/// exists but does not parse is reported as a serialization error.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit config file; `None` resolves the platform default on load.
    path: Option<PathBuf>,
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the platform default config file.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service reading `path` instead of the platform default.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// The file this service reads.
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => CoolcarePaths::config_file(),
        }
    }

    /// Gets the configuration, loading it if not cached.
    pub fn get_config(&self) -> Result<AppConfig> {
        if let Some(cached) = self.read_cache().as_ref() {
            return Ok(cached.clone());
        }

        let mut config = Self::load_file(&self.config_path()?)?;
        apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

        *self.write_cache() = Some(config.clone());
        Ok(config)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        *self.write_cache() = None;
    }

    fn load_file(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(AppConfig::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    // A poisoned lock only means a writer panicked mid-assignment of an
    // `Option`, which leaves nothing half-written.
    fn read_cache(&self) -> RwLockReadGuard<'_, Option<AppConfig>> {
        self.config
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, Option<AppConfig>> {
        self.config
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies `COOLCARE_*` overrides read through `lookup`.
///
/// Empty values are ignored.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let value = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(url) = value(ENV_API_BASE_URL) {
        config.api.base_url = url;
    }
    if let Some(key_id) = value(ENV_CHECKOUT_KEY_ID) {
        config.checkout.key_id = key_id;
    }
    if let Some(amount) = value(ENV_ADVANCE_AMOUNT_MINOR) {
        config.booking.advance_amount_minor = amount.trim().parse().map_err(|_| {
            CoolcareError::config(format!(
                "{ENV_ADVANCE_AMOUNT_MINOR} must be a whole number of minor units, got '{amount}'"
            ))
        })?;
    }
    if let Some(level) = value(ENV_LOG_LEVEL) {
        config.logging.level = level;
    }
    Ok(())
}
