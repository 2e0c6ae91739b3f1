//! Configuration management
//!
//! Config is read from `--config PATH`, else `config.toml` in the working
//! directory, else `config/default.toml`. Without any file the built-in
//! defaults reproduce the stock three-feed console.

use crate::constants::{
    DEFAULT_GLYPH, DEFAULT_MAX_LOG_ENTRIES, DEFAULT_TICK_INTERVAL_MS, DEFAULT_TITLE,
};
use crate::error::{ConsoleError, Result};
use crate::indicator::{IndicatorChannel, IndicatorTheme};
use crate::layout::{FeedRole, VideoFeed};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

// =============================================================================
// Application Configuration
// =============================================================================

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub indicators: IndicatorsConfig,
    pub theme: IndicatorTheme,
    pub feeds: Vec<FeedConfig>,
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title bar text
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorsConfig {
    /// Interval between indicator ticks
    pub tick_interval_ms: u64,
    /// Channels, top to bottom
    pub channels: Vec<ChannelConfig>,
}

/// One indicator channel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelConfig {
    pub name: String,
    /// SVG asset recolored with the indicator state (optional)
    #[serde(default)]
    pub icon: Option<PathBuf>,
    /// Terminal symbol
    #[serde(default = "default_glyph")]
    pub glyph: String,
}

/// One video feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Panel title
    pub label: String,
    /// Toggle control text (defaults to `label`)
    #[serde(default)]
    pub toggle_label: Option<String>,
    /// Media file; missing files show a placeholder
    #[serde(default)]
    pub source: Option<PathBuf>,
    #[serde(default)]
    pub role: FeedRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogsConfig {
    /// Maximum event log entries in memory
    pub max_entries: usize,
}

fn default_glyph() -> String {
    DEFAULT_GLYPH.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            indicators: IndicatorsConfig::default(),
            theme: IndicatorTheme::default(),
            feeds: vec![
                FeedConfig {
                    label: "Camera View".into(),
                    toggle_label: None,
                    source: Some(PathBuf::from("videos/Camera.mp4")),
                    role: FeedRole::Primary,
                },
                FeedConfig {
                    label: "Bird's Eyes View".into(),
                    toggle_label: Some("Radar View".into()),
                    source: Some(PathBuf::from("videos/BEV.mp4")),
                    role: FeedRole::Secondary,
                },
                FeedConfig {
                    label: "Driving Monitoring System".into(),
                    toggle_label: Some("DMS".into()),
                    source: Some(PathBuf::from("videos/DMS.mp4")),
                    role: FeedRole::Secondary,
                },
            ],
            logs: LogsConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl Default for IndicatorsConfig {
    fn default() -> Self {
        let channel = |name: &str, icon: &str, glyph: &str| ChannelConfig {
            name: name.to_string(),
            icon: Some(PathBuf::from(icon)),
            glyph: glyph.to_string(),
        };
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            channels: vec![
                channel("Lamp", "assets/icons/lamp.svg", "☀"),
                channel("Speaker", "assets/icons/speaker.svg", "♪"),
                channel("Buzzer", "assets/icons/buzzer.svg", "≋"),
            ],
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_LOG_ENTRIES,
        }
    }
}

impl Config {
    /// Parse and validate a TOML document
    pub fn from_toml(content: &str, path: &Path) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|e| ConsoleError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.message().to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the core relies on
    pub fn validate(&self) -> Result<()> {
        if self.indicators.tick_interval_ms == 0 {
            return Err(ConsoleError::ConfigValidation {
                field: "indicators.tick_interval_ms",
                reason: "must be greater than zero".into(),
            });
        }
        if self.indicators.channels.is_empty() {
            return Err(ConsoleError::ConfigValidation {
                field: "indicators.channels",
                reason: "at least one channel is required".into(),
            });
        }
        let primaries = self
            .feeds
            .iter()
            .filter(|f| f.role == FeedRole::Primary)
            .count();
        if primaries != 1 {
            return Err(ConsoleError::ConfigValidation {
                field: "feeds",
                reason: format!("{} primary feeds, expected one", primaries),
            });
        }
        if self.logs.max_entries == 0 {
            return Err(ConsoleError::ConfigValidation {
                field: "logs.max_entries",
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.indicators.tick_interval_ms)
    }

    /// Build the indicator channels
    pub fn channels(&self) -> Vec<IndicatorChannel> {
        self.indicators
            .channels
            .iter()
            .map(|c| IndicatorChannel::new(c.name.clone(), c.glyph.clone(), c.icon.clone()))
            .collect()
    }

    /// Build the video feeds, opening their sources
    pub fn feeds(&self) -> Vec<VideoFeed> {
        self.feeds
            .iter()
            .map(|f| {
                let feed = VideoFeed::new(f.label.clone(), f.role, f.source.as_deref());
                match &f.toggle_label {
                    Some(toggle) => feed.with_toggle_label(toggle.clone()),
                    None => feed,
                }
            })
            .collect()
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Implicit config locations, in lookup order
pub fn default_paths() -> [PathBuf; 2] {
    [
        PathBuf::from("config.toml"),
        Path::new("config").join("default.toml"),
    ]
}

/// Load config from an explicit file. Errors propagate.
pub fn load_from(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| ConsoleError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Config::from_toml(&content, path)
}

/// Load config from `explicit` if given, else from the first implicit
/// location that exists.
///
/// Problems with implicit files fall back to defaults with a warning.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_from(path);
    }

    let Some(path) = default_paths().into_iter().find(|p| p.exists()) else {
        debug!("No config file found, using defaults");
        return Ok(Config::default());
    };

    match load_from(&path) {
        Ok(config) => {
            debug!("Loaded config from {}", path.display());
            Ok(config)
        }
        Err(e) => {
            warn!("{}, using defaults", e);
            Ok(Config::default())
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
