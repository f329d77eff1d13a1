use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::registry::{self, CITIES, CityEntry};

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Optional default city id, e.g. "sydney". Used when `airq show` is
    /// called without an argument.
    pub default_city: Option<String>,
}

impl Config {
    /// The city a bare `show` starts with: the configured default if it
    /// still resolves, otherwise the first registry entry.
    pub fn default_city_entry(&self) -> &'static CityEntry {
        self.default_city
            .as_deref()
            .and_then(registry::resolve)
            .unwrap_or(&CITIES[0])
    }

    /// Record `city_id` as the default. Unknown ids are rejected so a stale
    /// config cannot point outside the registry.
    pub fn set_default_city(&mut self, city_id: &str) -> Result<()> {
        let city = registry::resolve(city_id).ok_or_else(|| {
            anyhow!(
                "Unknown city '{city_id}'.\n\
                 Hint: run `airq cities` to list the supported city ids."
            )
        })?;

        self.default_city = Some(city.id.to_string());
        Ok(())
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "airq", "airq-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
