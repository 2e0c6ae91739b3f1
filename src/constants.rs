//! Application-wide constants
//!
//! Centralized constants to avoid duplication and ensure consistency.

use crate::color::HexColor;

// =============================================================================
// Indicator theme
// =============================================================================

/// Border color of an active indicator (cyan)
pub const ACCENT_COLOR: HexColor = HexColor::rgb(0x00, 0xe6, 0xff);

/// Border color of an inactive indicator
pub const INACTIVE_COLOR: HexColor = HexColor::rgb(0x3a, 0x3e, 0x43);

/// Label color of an active indicator
pub const ACCENT_TEXT_COLOR: HexColor = HexColor::rgb(0xc8, 0xfa, 0xff);

/// Label color of an inactive indicator
pub const INACTIVE_TEXT_COLOR: HexColor = HexColor::rgb(0x55, 0x5a, 0x61);

/// Glow color used while an indicator is off (blends with the card)
pub const GLOW_OFF_COLOR: HexColor = HexColor::rgb(0x1a, 0x1e, 0x23);

/// Glow blur radius of an active indicator
pub const ACTIVE_GLOW: u8 = 24;

// =============================================================================
// Timing
// =============================================================================

/// Interval between indicator ticks (milliseconds)
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

/// Frame duration for TUI loop (milliseconds)
pub const FRAME_DURATION_MS: u64 = 16;

/// Status message display timeout (seconds)
pub const STATUS_MESSAGE_TIMEOUT_SECS: u64 = 2;

// =============================================================================
// Layout
// =============================================================================

/// Horizontal share of the primary feed when the stack is also visible
pub const PRIMARY_SHARE: u32 = 2;

/// Horizontal share of the secondary stack when the primary is also visible
pub const STACK_SHARE: u32 = 1;

/// Width of the indicator sidebar (columns)
pub const SIDEBAR_WIDTH: u16 = 24;

/// Height of one indicator card (rows)
pub const INDICATOR_CARD_HEIGHT: u16 = 5;

/// Height of the event log panel (rows)
pub const EVENT_LOG_HEIGHT: u16 = 8;

/// Number of lines to scroll per page (PageUp/PageDown)
pub const PAGE_SCROLL_LINES: usize = 5;

/// Auto-scroll threshold (lines from bottom)
pub const AUTO_SCROLL_THRESHOLD: usize = 2;

// =============================================================================
// Logs
// =============================================================================

/// Default capacity of the in-app event log
pub const DEFAULT_MAX_LOG_ENTRIES: usize = 200;

// =============================================================================
// Text
// =============================================================================

/// Default window title
pub const DEFAULT_TITLE: &str = "ADAS Monitoring System";

/// Text shown in place of a feed without a playable source
pub const PLACEHOLDER_TEXT: &str = "No video source";

/// Glyph used when a channel does not configure one
pub const DEFAULT_GLYPH: &str = "●";
