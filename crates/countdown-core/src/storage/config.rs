//! TOML-based application configuration.
//!
//! Stores presentation preferences:
//! - Display timezone, locale and bar width
//! - Rotating messages and the completion line
//! - Celebration toggle and particle count
//! - Tick cadence
//!
//! The target instant is deliberately not stored here; it is passed per run.
//!
//! Configuration is stored at `~/.config/countdown/config.toml`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::data_dir;
use crate::countdown::{parse_timezone, DEFAULT_TIMEZONE};
use crate::display::{DisplayLocale, MessageRotation};
use crate::error::{ConfigError, Result, ValidationError};

pub const MAX_BAR_WIDTH: u32 = 200;
pub const MAX_PARTICLES: u32 = 1_000;

/// How the target and progress are shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub locale: DisplayLocale,
    #[serde(default = "default_bar_width")]
    pub bar_width: u32,
}

/// Copy shown under the countdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesConfig {
    #[serde(default = "default_counting_messages")]
    pub counting: Vec<String>,
    #[serde(default = "default_complete_message")]
    pub complete: String,
    #[serde(default = "default_rotate_every_ticks")]
    pub rotate_every_ticks: u64,
}

/// Completion effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelebrationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_particles")]
    pub particles: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickConfig {
    #[serde(default = "default_cadence_ms")]
    pub cadence_ms: u64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/countdown/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub messages: MessagesConfig,
    #[serde(default)]
    pub celebration: CelebrationConfig,
    #[serde(default)]
    pub tick: TickConfig,
}

// Default functions
fn default_timezone() -> String {
    DEFAULT_TIMEZONE.into()
}
fn default_bar_width() -> u32 {
    30
}
fn default_counting_messages() -> Vec<String> {
    vec![
        "Preparando tudo com amor para que se sinta ainda mais linda.".into(),
        "Cada segundo a menos é um segundo mais perto. 💖".into(),
        "Falta pouco, respira fundo e sorri.".into(),
    ]
}
fn default_complete_message() -> String {
    "Chegou o grande dia! ✨ Que seja perfeito e cheio de carinho.".into()
}
fn default_rotate_every_ticks() -> u64 {
    5
}
fn default_true() -> bool {
    true
}
fn default_particles() -> u32 {
    24
}
fn default_cadence_ms() -> u64 {
    1_000
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            locale: DisplayLocale::default(),
            bar_width: default_bar_width(),
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            counting: default_counting_messages(),
            complete: default_complete_message(),
            rotate_every_ticks: default_rotate_every_ticks(),
        }
    }
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            particles: default_particles(),
        }
    }
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            cadence_ms: default_cadence_ms(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> std::result::Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        let mut current = root;
        while let Some(part) = parts.next() {
            if part.is_empty() {
                return Err(unknown());
            }
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => value
                        .parse::<bool>()
                        .map(serde_json::Value::Bool)
                        .map_err(|e| invalid(e.to_string()))?,
                    serde_json::Value::Number(_) => value
                        .parse::<u64>()
                        .map(|n| serde_json::Value::Number(n.into()))
                        .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?,
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing defaults if the file is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, writing defaults");
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Update a value by dot-separated key without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not fit the
    /// field (including unknown timezones and locales).
    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Update a value by key and persist to the default location.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.apply(key, value)?;
        self.save()
    }

    /// Check values that deserialize fine but cannot be rendered.
    pub fn validate(&self) -> Result<()> {
        parse_timezone(&self.display.timezone)?;
        let out_of_range = |key: &str, max: u32| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("must be at most {max}"),
        };
        if self.display.bar_width > MAX_BAR_WIDTH {
            return Err(out_of_range("display.bar_width", MAX_BAR_WIDTH).into());
        }
        if self.celebration.particles > MAX_PARTICLES {
            return Err(out_of_range("celebration.particles", MAX_PARTICLES).into());
        }
        Ok(())
    }

    pub fn timezone(&self) -> std::result::Result<Tz, ValidationError> {
        parse_timezone(&self.display.timezone)
    }

    pub fn cadence(&self) -> Duration {
        Duration::from_millis(self.tick.cadence_ms)
    }

    pub fn message_rotation(&self) -> MessageRotation {
        MessageRotation::new(
            self.messages.counting.clone(),
            self.messages.complete.clone(),
            self.messages.rotate_every_ticks,
        )
    }
}
