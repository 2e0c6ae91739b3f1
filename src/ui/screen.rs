//! Screen model
//!
//! The terminal's display surface: keeps the last command received for every
//! indicator, feed and split. Widgets draw from here, never from the core.

use crate::color::HexColor;
use crate::indicator::{ChannelId, IndicatorVisual, RecoloredIcon};
use crate::layout::{FeedId, SplitId};
use crate::surface::DisplaySurface;
use std::collections::BTreeMap;

/// Icon summary kept for drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTint {
    pub color: HexColor,
    /// Attributes rewritten in the SVG document
    pub replaced: usize,
}

/// What the screen shows for one indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorSlot {
    pub visual: IndicatorVisual,
    pub icon: Option<IconTint>,
}

#[derive(Debug, Default)]
pub struct ScreenModel {
    indicators: BTreeMap<ChannelId, IndicatorSlot>,
    feeds: BTreeMap<FeedId, bool>,
    stack_visible: bool,
    horizontal: Vec<u32>,
    stack: Vec<u32>,
}

impl ScreenModel {
    pub fn indicator(&self, channel: ChannelId) -> Option<&IndicatorSlot> {
        self.indicators.get(&channel)
    }

    /// Unknown feeds are hidden
    pub fn feed_visible(&self, feed: FeedId) -> bool {
        self.feeds.get(&feed).copied().unwrap_or(false)
    }

    pub fn stack_visible(&self) -> bool {
        self.stack_visible
    }

    pub fn shares(&self, split: SplitId) -> &[u32] {
        match split {
            SplitId::Horizontal => &self.horizontal,
            SplitId::Stack => &self.stack,
        }
    }
}

impl DisplaySurface for ScreenModel {
    fn set_indicator_visual(
        &mut self,
        channel: ChannelId,
        visual: &IndicatorVisual,
        icon: Option<&RecoloredIcon>,
    ) {
        let slot = IndicatorSlot {
            visual: *visual,
            icon: icon.map(|icon| IconTint {
                color: icon.color,
                replaced: icon.replaced,
            }),
        };
        self.indicators.insert(channel, slot);
    }

    fn set_feed_visible(&mut self, feed: FeedId, visible: bool) {
        self.feeds.insert(feed, visible);
    }

    fn set_stack_visible(&mut self, visible: bool) {
        self.stack_visible = visible;
    }

    fn set_split_shares(&mut self, split: SplitId, shares: &[u32]) {
        match split {
            SplitId::Horizontal => self.horizontal = shares.to_vec(),
            SplitId::Stack => self.stack = shares.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::IndicatorTheme;
    use std::path::PathBuf;

    #[test]
    fn test_indicator_slot_replaced_whole() {
        let mut screen = ScreenModel::default();
        let theme = IndicatorTheme::default();
        let id = ChannelId::new(0);
        let icon = RecoloredIcon {
            path: PathBuf::from("lamp.svg"),
            color: theme.accent,
            svg: String::new(),
            replaced: 4,
        };

        screen.set_indicator_visual(id, &theme.visual(true), Some(&icon));
        screen.set_indicator_visual(id, &theme.visual(false), None);

        let slot = screen.indicator(id).unwrap();
        assert_eq!(slot.visual, theme.visual(false));
        assert!(slot.icon.is_none());
    }

    #[test]
    fn test_splits_and_feeds() {
        let mut screen = ScreenModel::default();
        screen.set_feed_visible(FeedId::new(1), true);
        screen.set_split_shares(SplitId::Horizontal, &[2, 1]);
        screen.set_split_shares(SplitId::Stack, &[1, 0]);

        assert!(screen.feed_visible(FeedId::new(1)));
        assert!(!screen.feed_visible(FeedId::new(5)));
        assert_eq!(screen.shares(SplitId::Horizontal), &[2, 1]);
        assert_eq!(screen.shares(SplitId::Stack), &[1, 0]);
    }
}
