//! UI theme constants - dark console theme

use ratatui::style::{Color, Modifier, Style};

// Base colors
pub const COLOR_BG: Color = Color::Rgb(0x0b, 0x0f, 0x12);
pub const COLOR_CARD: Color = Color::Rgb(0x1a, 0x1e, 0x23);
pub const COLOR_BORDER: Color = Color::Rgb(0x2a, 0x35, 0x41);
pub const COLOR_SEPARATOR: Color = Color::Rgb(0x3a, 0x3e, 0x43);

// Text
pub const COLOR_TEXT: Color = Color::Rgb(0xcb, 0xd5, 0xe1);
pub const COLOR_MUTED: Color = Color::Rgb(0x94, 0xa3, 0xb8);
pub const COLOR_WHITE: Color = Color::Rgb(0xff, 0xff, 0xff);

// Accent
pub const COLOR_HEADER: Color = Color::Rgb(0x0e, 0xa5, 0xe9);
pub const COLOR_HEADER_DARK: Color = Color::Rgb(0x02, 0x84, 0xc7);
pub const COLOR_WARNING: Color = Color::Yellow;

// Semantic styles
pub const STYLE_BORDER: Style = Style::new().fg(COLOR_BORDER);
pub const STYLE_TEXT: Style = Style::new().fg(COLOR_TEXT);
pub const STYLE_MUTED: Style = Style::new().fg(COLOR_MUTED);
pub const STYLE_KEY: Style = Style::new().fg(COLOR_HEADER);
pub const STYLE_TITLE: Style = Style::new().fg(COLOR_TEXT).add_modifier(Modifier::BOLD);
pub const STYLE_FEED_HEADER: Style = Style::new()
    .fg(COLOR_WHITE)
    .bg(COLOR_HEADER)
    .add_modifier(Modifier::BOLD);
pub const STYLE_TOGGLE_ON: Style = Style::new()
    .fg(COLOR_WHITE)
    .bg(COLOR_HEADER_DARK)
    .add_modifier(Modifier::BOLD);
pub const STYLE_TOGGLE_OFF: Style = Style::new().fg(COLOR_MUTED).bg(COLOR_CARD);

// Symbols
pub const SYMBOL_ON: &str = "●";
pub const SYMBOL_OFF: &str = "○";
pub const SYMBOL_PLAYING: &str = "▶";
pub const SYMBOL_PAUSED: &str = "⏸";
pub const SYMBOL_CHECKED: &str = "◉";
pub const SYMBOL_UNCHECKED: &str = "○";

/// Bold style with the given foreground
pub fn style_bold(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
