//! Indicator state engine
//!
//! Owns the on/off state of every indicator channel. Each state change
//! derives the full visual from the theme, recolors the channel's icon and
//! commits everything to the display surface as one command.

pub mod icon;
pub mod random;
pub mod theme;

pub use icon::RecoloredIcon;
pub use random::{RandomSource, ScriptedRandom, SeededRandom, SystemRandom};
pub use theme::{IndicatorTheme, IndicatorVisual};

use crate::error::{ConsoleError, Result};
use crate::surface::DisplaySurface;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use tracing::trace;

/// Identifier of a registered indicator channel (its registration index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ChannelId(usize);

impl ChannelId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named on/off status light
#[derive(Debug, Clone)]
pub struct IndicatorChannel {
    name: String,
    glyph: String,
    icon: Option<PathBuf>,
    visual: IndicatorVisual,
    last_icon: Option<RecoloredIcon>,
}

impl IndicatorChannel {
    /// Create a channel. It starts on once registered with an engine.
    pub fn new(name: impl Into<String>, glyph: impl Into<String>, icon: Option<PathBuf>) -> Self {
        Self {
            name: name.into(),
            glyph: glyph.into(),
            icon,
            visual: IndicatorTheme::default().visual(true),
            last_icon: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// SVG asset recolored on every state change, if any
    pub fn icon_path(&self) -> Option<&PathBuf> {
        self.icon.as_ref()
    }

    pub fn is_on(&self) -> bool {
        self.visual.is_on
    }

    pub fn visual(&self) -> &IndicatorVisual {
        &self.visual
    }

    /// Most recent successfully recolored icon
    pub fn icon(&self) -> Option<&RecoloredIcon> {
        self.last_icon.as_ref()
    }
}

/// Drives indicator state and theming
pub struct IndicatorEngine {
    channels: Vec<IndicatorChannel>,
    theme: IndicatorTheme,
}

impl IndicatorEngine {
    /// Register `channels`; every channel starts on.
    pub fn new(channels: Vec<IndicatorChannel>, theme: IndicatorTheme) -> Self {
        let channels = channels
            .into_iter()
            .map(|mut channel| {
                channel.visual = theme.visual(true);
                channel
            })
            .collect();
        Self { channels, theme }
    }

    pub fn theme(&self) -> &IndicatorTheme {
        &self.theme
    }

    pub fn channels(&self) -> &[IndicatorChannel] {
        &self.channels
    }

    pub fn ids(&self) -> impl Iterator<Item = ChannelId> {
        (0..self.channels.len()).map(ChannelId)
    }

    pub fn channel(&self, id: ChannelId) -> Result<&IndicatorChannel> {
        self.channels
            .get(id.0)
            .ok_or(ConsoleError::UnknownChannel { id })
    }

    /// Apply a state to one channel and commit its visual to `surface`.
    pub fn set_state(
        &mut self,
        id: ChannelId,
        is_on: bool,
        surface: &mut dyn DisplaySurface,
    ) -> Result<()> {
        let channel = self
            .channels
            .get_mut(id.0)
            .ok_or(ConsoleError::UnknownChannel { id })?;

        let visual = self.theme.visual(is_on);
        let icon = channel
            .icon
            .as_deref()
            .and_then(|path| icon::load_recolored(path, visual.border_color));

        channel.visual = visual;
        if icon.is_some() {
            channel.last_icon = icon;
        }

        trace!("{} -> {}", channel.name, if is_on { "on" } else { "off" });
        surface.set_indicator_visual(id, &channel.visual, channel.last_icon.as_ref());
        Ok(())
    }

    /// Sample a new state for every channel.
    ///
    /// Returns the channels whose state flipped.
    pub fn tick(
        &mut self,
        random: &mut dyn RandomSource,
        surface: &mut dyn DisplaySurface,
    ) -> Result<Vec<ChannelId>> {
        let mut flipped = Vec::new();
        for id in self.ids().collect::<Vec<_>>() {
            let was_on = self.channel(id)?.is_on();
            let is_on = random.next_state();
            self.set_state(id, is_on, surface)?;
            if was_on != is_on {
                flipped.push(id);
            }
        }
        Ok(flipped)
    }
}
