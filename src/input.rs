//! Input event handling
//!
//! Translates keyboard events into app commands.

use crossterm::event::{KeyCode, KeyEvent};

/// Command to execute on the App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Quit,

    // Feeds (zero-based index into the declared feeds)
    ToggleFeed(usize),

    // Indicators
    ToggleTicking,
    TickOnce,

    // Event log
    CycleFilter,
    ClearLog,
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    ScrollToTop,
    ScrollToBottom,

    None,
}

/// Translate a key press into an AppCommand.
///
/// Digit keys map to feeds `1..=feed_count`; other digits are ignored so a
/// toggle never names a feed that does not exist.
pub fn translate_key(key: KeyEvent, feed_count: usize) -> AppCommand {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => AppCommand::Quit,

        // Feed toggles
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if index < feed_count {
                AppCommand::ToggleFeed(index)
            } else {
                AppCommand::None
            }
        }

        // Indicator timer
        KeyCode::Char('s') | KeyCode::Char('S') => AppCommand::ToggleTicking,
        KeyCode::Char('t') | KeyCode::Char('T') => AppCommand::TickOnce,

        // Event log
        KeyCode::Char('f') | KeyCode::Char('F') => AppCommand::CycleFilter,
        KeyCode::Backspace => AppCommand::ClearLog,
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => AppCommand::ScrollUp,
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => AppCommand::ScrollDown,
        KeyCode::PageUp => AppCommand::ScrollPageUp,
        KeyCode::PageDown => AppCommand::ScrollPageDown,
        KeyCode::Home => AppCommand::ScrollToTop,
        KeyCode::End => AppCommand::ScrollToBottom,

        _ => AppCommand::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(translate_key(key(KeyCode::Char('q')), 3), AppCommand::Quit);
        assert_eq!(translate_key(key(KeyCode::Esc), 3), AppCommand::Quit);
    }

    #[test]
    fn test_feed_digits_are_one_based() {
        assert_eq!(
            translate_key(key(KeyCode::Char('1')), 3),
            AppCommand::ToggleFeed(0)
        );
        assert_eq!(
            translate_key(key(KeyCode::Char('3')), 3),
            AppCommand::ToggleFeed(2)
        );
    }

    #[test]
    fn test_feed_digit_out_of_range_ignored() {
        assert_eq!(translate_key(key(KeyCode::Char('4')), 3), AppCommand::None);
        assert_eq!(translate_key(key(KeyCode::Char('0')), 3), AppCommand::None);
    }

    #[test]
    fn test_timer_keys() {
        assert_eq!(
            translate_key(key(KeyCode::Char('s')), 3),
            AppCommand::ToggleTicking
        );
        assert_eq!(translate_key(key(KeyCode::Char('t')), 3), AppCommand::TickOnce);
    }

    #[test]
    fn test_scroll_keys() {
        assert_eq!(translate_key(key(KeyCode::Up), 3), AppCommand::ScrollUp);
        assert_eq!(
            translate_key(key(KeyCode::Char('j')), 3),
            AppCommand::ScrollDown
        );
    }
}
