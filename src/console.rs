//! Console core
//!
//! Bundles the indicator engine, the layout controller and the randomness
//! provider behind the three entry points the shell calls:
//! `initialize`, `tick` and `set_feed_visibility`.

use crate::error::Result;
use crate::indicator::{
    ChannelId, IndicatorChannel, IndicatorEngine, IndicatorTheme, RandomSource,
};
use crate::layout::{FeedId, LayoutAllocation, LayoutController, VideoFeed};
use crate::surface::DisplaySurface;
use tracing::info;

pub struct Console {
    indicators: IndicatorEngine,
    layout: LayoutController,
    random: Box<dyn RandomSource>,
}

impl Console {
    /// Register channels and feeds, then push the initial indicator visuals
    /// and layout to `surface` so it is never drawn unconfigured.
    pub fn initialize(
        channels: Vec<IndicatorChannel>,
        feeds: Vec<VideoFeed>,
        theme: IndicatorTheme,
        random: Box<dyn RandomSource>,
        surface: &mut dyn DisplaySurface,
    ) -> Result<Self> {
        let layout = LayoutController::new(feeds)?;
        let mut indicators = IndicatorEngine::new(channels, theme);

        // Initial pass recolors icons for the "on" state.
        for id in indicators.ids().collect::<Vec<_>>() {
            indicators.set_state(id, true, surface)?;
        }
        layout.publish(surface);

        info!(
            "Console initialized: {} indicators, {} feeds",
            indicators.channels().len(),
            layout.feeds().len()
        );

        Ok(Self {
            indicators,
            layout,
            random,
        })
    }

    /// Sample a new state for every indicator.
    ///
    /// Returns the channels whose state flipped.
    pub fn tick(&mut self, surface: &mut dyn DisplaySurface) -> Result<Vec<ChannelId>> {
        self.indicators.tick(self.random.as_mut(), surface)
    }

    pub fn set_state(
        &mut self,
        channel: ChannelId,
        is_on: bool,
        surface: &mut dyn DisplaySurface,
    ) -> Result<()> {
        self.indicators.set_state(channel, is_on, surface)
    }

    pub fn set_feed_visibility(
        &mut self,
        feed: FeedId,
        visible: bool,
        surface: &mut dyn DisplaySurface,
    ) -> Result<()> {
        self.layout.set_feed_visibility(feed, visible, surface)
    }

    /// Flip a feed's visibility. Returns the new visibility.
    pub fn toggle_feed(&mut self, feed: FeedId, surface: &mut dyn DisplaySurface) -> Result<bool> {
        let visible = !self.layout.feed(feed)?.is_visible();
        self.layout.set_feed_visibility(feed, visible, surface)?;
        Ok(visible)
    }

    pub fn indicators(&self) -> &IndicatorEngine {
        &self.indicators
    }

    pub fn layout(&self) -> &LayoutController {
        &self.layout
    }

    pub fn allocation(&self) -> &LayoutAllocation {
        self.layout.allocation()
    }
}
