pub mod models;

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde_json::Value;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{ConfigFile, MAX_TIME_UNIT_MS};
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use crate::modules::AttackModule;

pub const DEFAULT_CONFIG_PATH: &str = "sigploit.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ConfigKey {
    TimeUnitMs,
    ClearScreen,
    Color,
    FileLoggingEnabled,
    Modules,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    path: Option<PathBuf>,
    data: ConfigFile,
}

impl Config {
    /// Load a config file that must exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data = Self::parse(&text)
            .map_err(|e| Error::config(format!("Invalid config in '{}': {}", path.display(), e)))?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            data,
        })
    }

    /// Load `path` when present, otherwise fall back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    fn parse(text: &str) -> Result<ConfigFile> {
        let value: Value = serde_json::from_str(text)?;
        let Value::Object(map) = &value else {
            return Err(Error::parse("top-level value must be a JSON object"));
        };
        for key in map.keys() {
            if ConfigKey::from_str(key).is_err() {
                return Err(Error::parse(format!(
                    "Unknown configuration key '{}'. Valid keys: {}",
                    key,
                    valid_csv::<ConfigKey>()
                )));
            }
        }

        let data: ConfigFile = serde_json::from_value(value)?;
        if data.time_unit_ms > MAX_TIME_UNIT_MS {
            return Err(Error::parse(format!(
                "{} must be at most {MAX_TIME_UNIT_MS}, got {}",
                ConfigKey::TimeUnitMs,
                data.time_unit_ms
            )));
        }
        Ok(data)
    }

    pub fn view(&self) -> &ConfigFile {
        &self.data
    }

    /// File the config was read from, `None` when running on defaults.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn time_unit(&self) -> Duration {
        Duration::from_millis(self.data.time_unit_ms)
    }

    pub fn clear_screen(&self) -> bool {
        self.data.clear_screen
    }

    pub fn color(&self) -> bool {
        self.data.color
    }

    pub fn set_color(&mut self, enabled: bool) {
        self.data.color = enabled;
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled
    }

    /// Command configured for a loadable module; stub modules have none.
    pub fn module_command(&self, module: AttackModule) -> Option<&str> {
        let cmd = match module {
            AttackModule::Ss7 => self.data.modules.ss7.as_str(),
            AttackModule::Gtp => self.data.modules.gtp.as_str(),
            AttackModule::Diameter | AttackModule::Sip => return None,
        };
        let cmd = cmd.trim();
        if cmd.is_empty() { None } else { Some(cmd) }
    }
}
