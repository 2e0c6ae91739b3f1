//! Command execution
//!
//! Translates AppCommand into method calls on App.

use super::App;
use crate::constants::PAGE_SCROLL_LINES;
use crate::input::AppCommand;

impl App {
    /// Execute an application command. Returns true if app should quit.
    pub fn execute_command(&mut self, cmd: AppCommand) -> bool {
        match cmd {
            AppCommand::Quit => {
                self.quit();
                true
            }
            AppCommand::ToggleFeed(index) => {
                self.toggle_feed(index);
                false
            }
            AppCommand::ToggleTicking => {
                self.toggle_ticking();
                false
            }
            AppCommand::TickOnce => {
                self.tick();
                false
            }
            AppCommand::CycleFilter => {
                let filter = self.events.filter().next();
                self.events.set_filter(filter);
                self.set_status(format!("Event log: {}", filter.label()));
                false
            }
            AppCommand::ClearLog => {
                self.events.clear();
                false
            }
            AppCommand::ScrollUp => {
                self.events.scroll_up();
                false
            }
            AppCommand::ScrollDown => {
                self.events.scroll_down();
                false
            }
            AppCommand::ScrollPageUp => {
                for _ in 0..PAGE_SCROLL_LINES {
                    self.events.scroll_up();
                }
                false
            }
            AppCommand::ScrollPageDown => {
                for _ in 0..PAGE_SCROLL_LINES {
                    self.events.scroll_down();
                }
                false
            }
            AppCommand::ScrollToTop => {
                self.events.scroll_to_top();
                false
            }
            AppCommand::ScrollToBottom => {
                self.events.scroll_to_bottom();
                false
            }
            AppCommand::None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::config::Config;
    use crate::indicator::ScriptedRandom;
    use crate::input::AppCommand;
    use crate::logging::EventFilter;

    fn app() -> App {
        App::new(Config::default(), Box::new(ScriptedRandom::new([true, false, true]))).unwrap()
    }

    #[test]
    fn test_tick_once() {
        let mut app = app();
        assert!(!app.execute_command(AppCommand::TickOnce));
        let states: Vec<bool> = app
            .console()
            .indicators()
            .channels()
            .iter()
            .map(|c| c.is_on())
            .collect();
        assert_eq!(states, vec![true, false, true]);
    }

    #[test]
    fn test_cycle_filter_sets_status() {
        let mut app = app();
        app.execute_command(AppCommand::CycleFilter);
        let state = app.state();
        assert_eq!(state.filter, EventFilter::Indicators);
        assert_eq!(state.status_message, Some("Event log: Indicators"));
    }

    #[test]
    fn test_clear_log() {
        let mut app = app();
        app.execute_command(AppCommand::ClearLog);
        assert!(app.events().entries().is_empty());
    }

    #[test]
    fn test_hide_all_feeds() {
        let mut app = app();
        for i in 0..3 {
            app.execute_command(AppCommand::ToggleFeed(i));
        }
        let state = app.state();
        assert!(!state.stack_visible);
        assert_eq!(state.horizontal, &[1, 1]);
        assert_eq!(state.stack, &[1, 1]);
    }
}
