//! Centralized error types for the console
//!
//! All console errors are represented by the `ConsoleError` enum.
//! Use `Result<T>` as shorthand for `std::result::Result<T, ConsoleError>`.

use crate::indicator::ChannelId;
use crate::layout::FeedId;
use std::fmt;
use std::path::PathBuf;

/// All console errors
#[derive(Debug)]
pub enum ConsoleError {
    // === Config ===
    /// Config file could not be read
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Config file is not valid TOML for the expected schema
    ConfigParse { path: PathBuf, reason: String },
    /// Invalid config value
    ConfigValidation { field: &'static str, reason: String },
    /// Color string is not `#rrggbb`
    InvalidColor { value: String },

    // === Contract ===
    /// Channel id does not belong to this console
    UnknownChannel { id: ChannelId },
    /// Feed id does not belong to this console
    UnknownFeed { id: FeedId },

    // === Runtime ===
    /// Terminal setup, drawing or input failed
    Terminal { source: std::io::Error },
    /// Tokio runtime creation failed
    Runtime { source: std::io::Error },
    /// Writing headless output failed
    Output { source: std::io::Error },
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigRead { source, .. }
            | Self::Terminal { source }
            | Self::Runtime { source }
            | Self::Output { source } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigRead { path, .. } => {
                write!(f, "Cannot read config: {}", path.display())
            }
            Self::ConfigParse { path, reason } => {
                write!(f, "Invalid config {}: {}", path.display(), reason)
            }
            Self::ConfigValidation { field, reason } => {
                write!(f, "Invalid {}: {}", field, reason)
            }
            Self::InvalidColor { value } => {
                write!(f, "Invalid color '{}' (expected #rrggbb)", value)
            }
            Self::UnknownChannel { id } => write!(f, "Unknown indicator channel {}", id),
            Self::UnknownFeed { id } => write!(f, "Unknown video feed {}", id),
            Self::Terminal { .. } => write!(f, "Terminal I/O failed"),
            Self::Runtime { .. } => write!(f, "Failed to create runtime"),
            Self::Output { .. } => write!(f, "Failed to write output"),
        }
    }
}

/// Alias for Result with ConsoleError
pub type Result<T> = std::result::Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_validation() {
        let err = ConsoleError::ConfigValidation {
            field: "feeds",
            reason: "no primary feed".into(),
        };
        assert_eq!(err.to_string(), "Invalid feeds: no primary feed");
    }

    #[test]
    fn test_source_chain() {
        let err = ConsoleError::ConfigRead {
            path: PathBuf::from("config.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.source().is_some());

        let err = ConsoleError::InvalidColor {
            value: "cyan".into(),
        };
        assert!(err.source().is_none());
    }
}
