//! TOML configuration.
//!
//! Looked up in this order: an explicit path (the `--config` flag), the
//! `BLOCKTRIS_CONFIG` environment variable, then
//! `<config dir>/blocktris/config.toml`. Every field has a default, so a
//! partial file (or none at all) is fine.
//!
//! ```toml
//! [game]
//! edition = "modern"
//! seed = 42
//! start_level = 0
//! preview = 3
//! randomizer = "uniform"
//!
//! [display]
//! cell_width = 2
//! frame_ms = 16
//! show_grid = true
//!
//! [log]
//! level = "info"
//! file = "blocktris.log"
//! ```

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::Ruleset;
use crate::term::MAX_CELL_WIDTH;
use crate::types::{Edition, Randomizer, MAX_PREVIEW, TICK_MS};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "BLOCKTRIS_CONFIG";

const CONFIG_DIR_NAME: &str = "blocktris";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Accepted `[log] level` values.
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub display: DisplayConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub edition: String,
    /// Fixed piece sequence; a time-based seed is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    pub start_level: u32,
    /// Overrides the edition's preview length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<usize>,
    pub randomizer: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            edition: Edition::default().as_str().to_string(),
            seed: None,
            start_level: 0,
            preview: None,
            randomizer: Randomizer::default().as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Terminal columns per board cell.
    pub cell_width: u16,
    /// Frame loop interval.
    pub frame_ms: u32,
    pub show_grid: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_width: 2,
            frame_ms: TICK_MS,
            show_grid: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter when `RUST_LOG` is unset.
    pub level: String,
    pub file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: PathBuf::from("blocktris.log"),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
    Invalid { field: &'static str, value: String },
}

impl ConfigError {
    fn invalid(field: &'static str, value: impl ToString) -> Self {
        ConfigError::Invalid {
            field,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "cannot read config: {err}"),
            ConfigError::Parse(err) => write!(f, "invalid config file: {err}"),
            ConfigError::Serialize(err) => write!(f, "cannot serialize config: {err}"),
            ConfigError::Invalid { field, value } => {
                write!(f, "invalid value {value:?} for `{field}`")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Serialize(err) => Some(err),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err)
    }
}

/// Where to look for the config file, without checking that it exists.
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl Config {
    /// Load the config.
    ///
    /// An explicit path must exist. A file missing from the environment or
    /// default location means defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = config_path(explicit) else {
            return Ok(Self::default());
        };
        match Self::load_file(&path) {
            Err(ConfigError::Io(err))
                if err.kind() == io::ErrorKind::NotFound && explicit.is_none() =>
            {
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.edition()?;
        self.randomizer()?;
        if let Some(preview) = self.game.preview {
            if preview == 0 || preview > MAX_PREVIEW {
                return Err(ConfigError::invalid("game.preview", preview));
            }
        }
        let cell_width = self.display.cell_width;
        if cell_width == 0 || cell_width > MAX_CELL_WIDTH {
            return Err(ConfigError::invalid("display.cell_width", cell_width));
        }
        if self.display.frame_ms == 0 {
            return Err(ConfigError::invalid("display.frame_ms", 0));
        }
        let level = self.log.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::invalid("log.level", &self.log.level));
        }
        Ok(())
    }

    pub fn edition(&self) -> Result<Edition, ConfigError> {
        Edition::from_str(&self.game.edition)
            .ok_or_else(|| ConfigError::invalid("game.edition", &self.game.edition))
    }

    pub fn randomizer(&self) -> Result<Randomizer, ConfigError> {
        Randomizer::from_str(&self.game.randomizer)
            .ok_or_else(|| ConfigError::invalid("game.randomizer", &self.game.randomizer))
    }

    /// The edition's ruleset with this config's overrides applied.
    pub fn ruleset(&self) -> Result<Ruleset, ConfigError> {
        self.validate()?;
        let mut rules = Ruleset::for_edition(self.edition()?)
            .with_randomizer(self.randomizer()?)
            .with_start_level(self.game.start_level);
        if let Some(preview) = self.game.preview {
            rules = rules.with_preview(preview);
        }
        Ok(rules)
    }
}
