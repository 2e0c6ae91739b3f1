//! Video panel layout controller
//!
//! Owns feed visibility and recomputes the two-level split layout from the
//! current flags on every change:
//!
//! ```text
//! +-----------------+----------+
//! |                 | second 1 |
//! |     primary     +----------+
//! |                 | second 2 |
//! +-----------------+----------+
//! ```

pub mod allocation;
pub mod feed;

pub use allocation::{LayoutAllocation, SplitId, SplitShares};
pub use feed::{FeedId, FeedRole, FeedSource, Playback, PlaybackState, VideoFeed};

use crate::error::{ConsoleError, Result};
use crate::surface::DisplaySurface;
use tracing::debug;

/// Keeps feed visibility and split shares consistent
pub struct LayoutController {
    feeds: Vec<VideoFeed>,
    primary: FeedId,
    secondary: Vec<FeedId>,
    allocation: LayoutAllocation,
}

impl LayoutController {
    /// Register `feeds`. Exactly one feed must have the primary role.
    ///
    /// All feeds start visible and the initial allocation is computed here,
    /// so the layout is configured before anything is drawn.
    pub fn new(mut feeds: Vec<VideoFeed>) -> Result<Self> {
        let primaries: Vec<FeedId> = feeds
            .iter()
            .enumerate()
            .filter(|(_, feed)| feed.role() == FeedRole::Primary)
            .map(|(i, _)| FeedId::new(i))
            .collect();

        let primary = match primaries.as_slice() {
            [primary] => *primary,
            [] => {
                return Err(ConsoleError::ConfigValidation {
                    field: "feeds",
                    reason: "no primary feed".into(),
                })
            }
            many => {
                return Err(ConsoleError::ConfigValidation {
                    field: "feeds",
                    reason: format!("{} primary feeds, expected one", many.len()),
                })
            }
        };

        let secondary = (0..feeds.len())
            .map(FeedId::new)
            .filter(|&id| id != primary)
            .collect();

        for feed in &mut feeds {
            feed.visible = true;
        }

        let mut controller = Self {
            feeds,
            primary,
            secondary,
            allocation: allocation::allocate(Vec::new(), false, &[]),
        };
        controller.allocation = controller.compute();
        Ok(controller)
    }

    pub fn feeds(&self) -> &[VideoFeed] {
        &self.feeds
    }

    pub fn ids(&self) -> impl Iterator<Item = FeedId> {
        (0..self.feeds.len()).map(FeedId::new)
    }

    pub fn feed(&self, id: FeedId) -> Result<&VideoFeed> {
        self.feeds
            .get(id.index())
            .ok_or(ConsoleError::UnknownFeed { id })
    }

    pub fn primary(&self) -> FeedId {
        self.primary
    }

    /// Secondary feeds, top to bottom
    pub fn secondary(&self) -> &[FeedId] {
        &self.secondary
    }

    pub fn allocation(&self) -> &LayoutAllocation {
        &self.allocation
    }

    /// Show or hide a feed and re-apply the whole layout to `surface`.
    pub fn set_feed_visibility(
        &mut self,
        id: FeedId,
        visible: bool,
        surface: &mut dyn DisplaySurface,
    ) -> Result<()> {
        let feed = self
            .feeds
            .get_mut(id.index())
            .ok_or(ConsoleError::UnknownFeed { id })?;
        feed.visible = visible;
        debug!("{} {}", feed.label(), if visible { "shown" } else { "hidden" });

        self.allocation = self.compute();
        self.publish(surface);
        Ok(())
    }

    /// Push the current allocation to `surface`.
    pub fn publish(&self, surface: &mut dyn DisplaySurface) {
        for (id, &visible) in self.ids().zip(&self.allocation.feeds) {
            surface.set_feed_visible(id, visible);
        }
        surface.set_stack_visible(self.allocation.stack_visible);
        for split in [SplitId::Horizontal, SplitId::Stack] {
            surface.set_split_shares(split, self.allocation.shares(split).as_slice());
        }
    }

    fn compute(&self) -> LayoutAllocation {
        let flags: Vec<bool> = self.feeds.iter().map(VideoFeed::is_visible).collect();
        let secondary: Vec<bool> = self.secondary.iter().map(|id| flags[id.index()]).collect();
        let primary_visible = flags[self.primary.index()];
        allocation::allocate(flags, primary_visible, &secondary)
    }
}
