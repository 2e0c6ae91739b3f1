//! Application state snapshot used for rendering

use crate::indicator::ChannelId;
use crate::layout::{FeedId, FeedSource};
use crate::logging::EventFilter;
use crate::ui::screen::IndicatorSlot;
use std::time::Duration;

/// One indicator card
#[derive(Clone)]
pub struct IndicatorView<'a> {
    pub id: ChannelId,
    pub name: &'a str,
    pub glyph: &'a str,
    /// `None` until the surface has received a visual
    pub slot: Option<IndicatorSlot>,
    pub has_vector_icon: bool,
}

/// One feed panel and its toggle
#[derive(Clone)]
pub struct FeedView<'a> {
    pub id: FeedId,
    pub label: &'a str,
    pub toggle_label: &'a str,
    pub visible: bool,
    pub source: &'a FeedSource,
}

/// Application state snapshot for rendering (borrowed view)
#[derive(Clone)]
pub struct AppState<'a> {
    pub title: &'a str,
    pub indicators: Vec<IndicatorView<'a>>,

    // Layout, as last applied to the screen
    pub primary: FeedView<'a>,
    pub secondary: Vec<FeedView<'a>>,
    /// Every feed in declaration order (toggle bar)
    pub feeds: Vec<FeedView<'a>>,
    pub stack_visible: bool,
    pub horizontal: &'a [u32],
    pub stack: &'a [u32],

    // Timer
    pub ticking: bool,
    pub tick_interval: Duration,

    // UI state
    pub filter: EventFilter,
    pub status_message: Option<&'a str>,
}
