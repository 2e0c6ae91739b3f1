//! Display surface seam
//!
//! The core never draws. It issues commands to a `DisplaySurface`, which the
//! terminal screen model, the headless JSON emitter and tests implement.

use crate::indicator::{ChannelId, IndicatorVisual, RecoloredIcon};
use crate::layout::{FeedId, SplitId};
use serde::Serialize;

/// Receiver of display commands from the console core
pub trait DisplaySurface {
    /// Replace every visual attribute of one indicator at once.
    ///
    /// `icon` is the latest recolored icon, or `None` when the channel has no
    /// vector icon or it could never be read.
    fn set_indicator_visual(
        &mut self,
        channel: ChannelId,
        visual: &IndicatorVisual,
        icon: Option<&RecoloredIcon>,
    );

    fn set_feed_visible(&mut self, feed: FeedId, visible: bool);

    /// Show or hide the container holding the secondary feeds
    fn set_stack_visible(&mut self, visible: bool);

    fn set_split_shares(&mut self, split: SplitId, shares: &[u32]);
}

/// One display command, as issued to a surface
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum SurfaceCommand {
    IndicatorVisual {
        channel: ChannelId,
        visual: IndicatorVisual,
        icon: Option<RecoloredIcon>,
    },
    FeedVisible {
        feed: FeedId,
        visible: bool,
    },
    StackVisible {
        visible: bool,
    },
    SplitShares {
        split: SplitId,
        shares: Vec<u32>,
    },
}

/// Surface that records every command it receives
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    /// Take the recorded commands, leaving the surface empty
    pub fn drain(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl DisplaySurface for RecordingSurface {
    fn set_indicator_visual(
        &mut self,
        channel: ChannelId,
        visual: &IndicatorVisual,
        icon: Option<&RecoloredIcon>,
    ) {
        self.commands.push(SurfaceCommand::IndicatorVisual {
            channel,
            visual: *visual,
            icon: icon.cloned(),
        });
    }

    fn set_feed_visible(&mut self, feed: FeedId, visible: bool) {
        self.commands
            .push(SurfaceCommand::FeedVisible { feed, visible });
    }

    fn set_stack_visible(&mut self, visible: bool) {
        self.commands.push(SurfaceCommand::StackVisible { visible });
    }

    fn set_split_shares(&mut self, split: SplitId, shares: &[u32]) {
        self.commands.push(SurfaceCommand::SplitShares {
            split,
            shares: shares.to_vec(),
        });
    }
}
