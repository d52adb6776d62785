//! Configuration file handling.
//!
//! Settings are read from `<config_dir>/opcalc/config.toml`. Every key is
//! optional and a missing file means defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use crate::calculator::{AngleMode, Precision};
use crate::session::{DEFAULT_EXPORT_PATH, SessionState};

/// Precision as written in the file: `"auto"` or a digit count.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PrecisionSetting {
    Digits(i64),
    Name(String),
}

impl PrecisionSetting {
    fn resolve(&self) -> Result<Precision> {
        let precision = match self {
            Self::Digits(d) => Precision::fixed(*d)?,
            Self::Name(name) => name.parse()?,
        };
        Ok(precision)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub angle_mode: AngleMode,
    pub precision: Option<PrecisionSetting>,
    pub export_path: PathBuf,
    pub banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            angle_mode: AngleMode::Radians,
            precision: None,
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            banner: true,
        }
    }
}

impl Config {
    /// Default location of the config file, if a config directory exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("opcalc").join("config.toml"))
    }

    /// Load from `path`, or from [`Config::default_path`] when `None`.
    ///
    /// A missing file yields defaults; an unreadable or malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            debug!("No config directory, using defaults");
            return Ok(Self::default());
        };

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()));
            }
        };

        let config =
            Self::parse(&text).with_context(|| format!("invalid config {}", path.display()))?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parse and validate config text.
    pub fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.precision()?;
        Ok(config)
    }

    pub fn precision(&self) -> Result<Precision> {
        match &self.precision {
            Some(setting) => setting.resolve(),
            None => Ok(Precision::Auto),
        }
    }

    /// Initial session state described by this config.
    pub fn session_state(&self) -> Result<SessionState> {
        Ok(SessionState::new(self.angle_mode, self.precision()?))
    }
}
