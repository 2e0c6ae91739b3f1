//! Application state and orchestration
//!
//! Owns the console core, the screen it draws to, the event log and the
//! indicator timer. The UI layer only calls `poll`, `handle_key` and `state`.

mod commands;
pub mod state;
pub mod ticker;

pub use state::{AppState, FeedView, IndicatorView};
pub use ticker::Ticker;

use crate::config::Config;
use crate::console::Console;
use crate::constants::STATUS_MESSAGE_TIMEOUT_SECS;
use crate::error::Result;
use crate::indicator::RandomSource;
use crate::input;
use crate::layout::{FeedId, FeedSource, SplitId};
use crate::logging::{EventEntry, EventLog};
use crate::ui::screen::ScreenModel;
use crossterm::event::KeyEvent;
use std::time::Instant;
use tracing::{error, info};

/// Main application
pub struct App {
    config: Config,
    console: Console,
    pub(super) screen: ScreenModel,
    pub(super) events: EventLog,
    ticker: Ticker,

    // UI state
    status_message: Option<(String, Instant)>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, random: Box<dyn RandomSource>) -> Result<Self> {
        let mut screen = ScreenModel::default();
        let console = Console::initialize(
            config.channels(),
            config.feeds(),
            config.theme,
            random,
            &mut screen,
        )?;

        let events = EventLog::new(config.logs.max_entries);
        let ticker = Ticker::new(config.tick_interval(), Instant::now());

        let mut app = Self {
            config,
            console,
            screen,
            events,
            ticker,
            status_message: None,
            should_quit: false,
        };
        app.log_welcome_message();
        Ok(app)
    }

    fn log_welcome_message(&mut self) {
        self.events.add(EventEntry::system("System ready."));
        for feed in self.console.layout().feeds() {
            let message = match feed.source() {
                FeedSource::Stream(playback) => {
                    format!("{}: playing {}", feed.label(), playback.path().display())
                }
                FeedSource::Placeholder => format!("{}: no video source", feed.label()),
            };
            self.events.add(EventEntry::system(message));
        }
    }

    // =========================================================================
    // State access
    // =========================================================================

    pub fn state(&self) -> AppState<'_> {
        let indicators = self
            .console
            .indicators()
            .ids()
            .zip(self.console.indicators().channels())
            .map(|(id, channel)| IndicatorView {
                id,
                name: channel.name(),
                glyph: channel.glyph(),
                slot: self.screen.indicator(id).copied(),
                has_vector_icon: channel.icon_path().is_some(),
            })
            .collect();

        let layout = self.console.layout();
        let feeds: Vec<FeedView<'_>> = layout
            .ids()
            .zip(layout.feeds())
            .map(|(id, feed)| FeedView {
                id,
                label: feed.label(),
                toggle_label: feed.toggle_label(),
                visible: self.screen.feed_visible(id),
                source: feed.source(),
            })
            .collect();

        let view = |id: FeedId| feeds[id.index()].clone();

        AppState {
            title: &self.config.window.title,
            indicators,
            primary: view(layout.primary()),
            secondary: layout.secondary().iter().map(|&id| view(id)).collect(),
            stack_visible: self.screen.stack_visible(),
            horizontal: self.screen.shares(SplitId::Horizontal),
            stack: self.screen.shares(SplitId::Stack),
            ticking: self.ticker.is_running(),
            tick_interval: self.ticker.interval(),
            filter: self.events.filter(),
            status_message: self.status_text(),
            feeds,
        }
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn screen(&self) -> &ScreenModel {
        &self.screen
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    // =========================================================================
    // Timer
    // =========================================================================

    /// Fire an indicator tick when one is due at `now`
    pub fn poll(&mut self, now: Instant) {
        if self.ticker.poll(now) {
            self.tick();
        }
    }

    pub(super) fn tick(&mut self) {
        match self.console.tick(&mut self.screen) {
            Ok(flipped) => {
                for id in flipped {
                    if let Ok(channel) = self.console.indicators().channel(id) {
                        self.events
                            .add(EventEntry::indicator(channel.name(), channel.is_on()));
                    }
                }
            }
            Err(e) => {
                error!("Indicator tick failed: {}", e);
                self.events.add(EventEntry::system(format!("Tick failed: {}", e)));
            }
        }
    }

    pub(super) fn toggle_ticking(&mut self) {
        let running = !self.ticker.is_running();
        self.ticker.set_running(running, Instant::now());
        let message = if running {
            "Indicator timer started"
        } else {
            "Indicator timer stopped"
        };
        info!("{}", message);
        self.events.add(EventEntry::system(message));
        self.set_status(message);
    }

    // =========================================================================
    // Feeds
    // =========================================================================

    pub(super) fn toggle_feed(&mut self, index: usize) {
        let id = FeedId::new(index);
        match self.console.toggle_feed(id, &mut self.screen) {
            Ok(visible) => {
                if let Ok(feed) = self.console.layout().feed(id) {
                    self.events.add(EventEntry::feed(feed.label(), visible));
                }
            }
            Err(e) => {
                error!("Feed toggle failed: {}", e);
                self.set_status(e.to_string());
            }
        }
    }

    // =========================================================================
    // Status message
    // =========================================================================

    pub(super) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    fn status_text(&self) -> Option<&str> {
        self.status_message
            .as_ref()
            .filter(|(_, t)| t.elapsed().as_secs() < STATUS_MESSAGE_TIMEOUT_SECS)
            .map(|(s, _)| s.as_str())
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // =========================================================================
    // Input handling
    // =========================================================================

    /// Handle keyboard input. Returns true if app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let feed_count = self.console.layout().feeds().len();
        let cmd = input::translate_key(key, feed_count);
        self.execute_command(cmd)
    }

    /// Handle mouse scroll
    pub fn handle_scroll(&mut self, up: bool) {
        if up {
            self.events.scroll_up();
        } else {
            self.events.scroll_down();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::ScriptedRandom;
    use crate::input::AppCommand;
    use crate::logging::EventKind;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::time::Duration;

    fn app(script: Vec<bool>) -> App {
        App::new(Config::default(), Box::new(ScriptedRandom::new(script))).unwrap()
    }

    #[test]
    fn test_new_app_is_configured_before_first_draw() {
        let app = app(vec![]);
        let state = app.state();

        assert_eq!(state.title, "ADAS Monitoring System");
        assert_eq!(state.indicators.len(), 3);
        assert!(state.indicators.iter().all(|i| i.slot.is_some()));
        assert!(state.stack_visible);
        assert_eq!(state.horizontal, &[2, 1]);
        assert_eq!(state.stack, &[1, 1]);
        assert_eq!(state.primary.label, "Camera View");
        assert_eq!(state.secondary.len(), 2);
        assert!(state.ticking);
    }

    #[test]
    fn test_welcome_log() {
        let app = app(vec![]);
        let first = &app.events().entries()[0];
        assert_eq!(first.message(), "System ready.");
    }

    #[test]
    fn test_poll_ticks_after_interval() {
        let mut app = app(vec![false]);
        let before = app.events().entries().len();

        app.poll(Instant::now() + Duration::from_secs(2));

        let state = app.state();
        assert!(state
            .indicators
            .iter()
            .all(|i| !i.slot.unwrap().visual.is_on));
        // One entry per channel that flipped on -> off
        assert_eq!(app.events().entries().len(), before + 3);
    }

    #[test]
    fn test_stopped_timer_does_not_tick() {
        let mut app = app(vec![false]);
        app.execute_command(AppCommand::ToggleTicking);
        app.poll(Instant::now() + Duration::from_secs(5));
        assert!(app.console().indicators().channels().iter().all(|c| c.is_on()));
        assert!(!app.state().ticking);
    }

    #[test]
    fn test_toggle_feed_key_updates_screen_and_log() {
        let mut app = app(vec![]);
        app.handle_key(KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE));

        let state = app.state();
        assert!(!state.secondary[1].visible);
        assert_eq!(state.stack, &[1, 0]);

        let last = app.events().entries().back().unwrap();
        assert!(matches!(&last.kind, EventKind::Feed { visible: false, .. }));
    }

    #[test]
    fn test_quit_key() {
        let mut app = app(vec![]);
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(app.should_quit());
    }
}
