//! Video feed records and their playback handles

use crate::constants::PLACEHOLDER_TEXT;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::debug;

/// Identifier of a declared video feed (its declaration index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FeedId(usize);

impl FeedId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for FeedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Slot a feed occupies in the split layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FeedRole {
    /// Large left-hand panel
    Primary,
    /// Member of the stacked right-hand region
    #[default]
    Secondary,
}

/// Playback state of a media source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Stopped,
}

/// Lifetime handle for a feed's looping media playback.
///
/// Decoding and rendering happen elsewhere; the handle only records what is
/// playing and since when. Playback stops when the handle is dropped.
#[derive(Debug)]
pub struct Playback {
    path: PathBuf,
    started: Instant,
    state: PlaybackState,
}

impl Playback {
    /// Start looping playback of `path`
    pub fn start(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        debug!("Playback started: {}", path.display());
        Self {
            path,
            started: Instant::now(),
            state: PlaybackState::Playing,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Time since playback started (zero once stopped)
    pub fn elapsed(&self) -> Duration {
        match self.state {
            PlaybackState::Playing => self.started.elapsed(),
            PlaybackState::Stopped => Duration::ZERO,
        }
    }

    /// Stop playback. Calling it again has no effect.
    pub fn stop(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Stopped;
            debug!("Playback stopped: {}", self.path.display());
        }
    }
}

impl Drop for Playback {
    fn drop(&mut self) {
        self.stop();
    }
}

/// What a feed panel shows
#[derive(Debug)]
pub enum FeedSource {
    /// Looping media file
    Stream(Playback),
    /// Static text, used when no playable source exists
    Placeholder,
}

impl FeedSource {
    /// Resolve a configured source path. Decided once, at feed creation.
    pub fn open(path: Option<&Path>) -> Self {
        match path {
            Some(path) if path.is_file() => Self::Stream(Playback::start(path)),
            Some(path) => {
                debug!("Video source {} not found, using placeholder", path.display());
                Self::Placeholder
            }
            None => Self::Placeholder,
        }
    }

    pub fn playback(&self) -> Option<&Playback> {
        match self {
            Self::Stream(playback) => Some(playback),
            Self::Placeholder => None,
        }
    }

    /// Short description for display
    pub fn describe(&self) -> String {
        match self {
            Self::Stream(playback) => playback
                .path()
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| playback.path().display().to_string()),
            Self::Placeholder => PLACEHOLDER_TEXT.to_string(),
        }
    }
}

/// A labeled video panel
#[derive(Debug)]
pub struct VideoFeed {
    label: String,
    toggle_label: String,
    role: FeedRole,
    source: FeedSource,
    pub(super) visible: bool,
}

impl VideoFeed {
    /// Create a visible feed, opening its source if it exists.
    pub fn new(label: impl Into<String>, role: FeedRole, source: Option<&Path>) -> Self {
        let label = label.into();
        Self {
            toggle_label: label.clone(),
            label,
            role,
            source: FeedSource::open(source),
            visible: true,
        }
    }

    /// Text of the toggle control, when it differs from the panel label
    pub fn with_toggle_label(mut self, toggle_label: impl Into<String>) -> Self {
        self.toggle_label = toggle_label.into();
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn toggle_label(&self) -> &str {
        &self.toggle_label
    }

    pub fn role(&self) -> FeedRole {
        self.role
    }

    pub fn source(&self) -> &FeedSource {
        &self.source
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
