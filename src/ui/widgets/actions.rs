//! Actions widget - displays keyboard shortcuts bar
//!
//! The timer label follows the current ticking state. A pending status
//! message replaces the right-hand side of the bar.

use crate::app::AppState;
use crate::ui::theme::{
    COLOR_WARNING, STYLE_BORDER, STYLE_KEY, STYLE_MUTED, STYLE_TEXT, SYMBOL_PAUSED, SYMBOL_PLAYING,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct ActionsWidget<'a> {
    state: &'a AppState<'a>,
}

impl<'a> ActionsWidget<'a> {
    pub fn new(state: &'a AppState<'a>) -> Self {
        Self { state }
    }
}

impl Widget for ActionsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let feed_keys = match self.state.feeds.len() {
            0 => None,
            1 => Some("1".to_string()),
            n => Some(format!("1-{}", n.min(9))),
        };

        let (timer_symbol, timer_label) = if self.state.ticking {
            (SYMBOL_PLAYING, "Stop")
        } else {
            (SYMBOL_PAUSED, "Start")
        };

        let mut spans = vec![Span::raw("  ")];
        if let Some(keys) = feed_keys {
            spans.push(Span::styled(keys, STYLE_KEY));
            spans.push(Span::styled(" Feeds  ", STYLE_TEXT));
        }
        spans.extend([
            Span::styled("S", STYLE_KEY),
            Span::styled(format!(" {} ", timer_label), STYLE_TEXT),
            Span::styled(format!("{}  ", timer_symbol), STYLE_MUTED),
            Span::styled("T", STYLE_KEY),
            Span::styled(" Tick  ", STYLE_TEXT),
            Span::styled("F", STYLE_KEY),
            Span::styled(" Filter  ", STYLE_TEXT),
            Span::styled("⌫", STYLE_KEY),
            Span::styled(" Clear  ", STYLE_TEXT),
            Span::styled("Q", STYLE_KEY),
            Span::styled(" Quit", STYLE_TEXT),
        ]);

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(STYLE_BORDER);
        let inner = block.inner(area);
        block.render(area, buf);

        let [keys_area, status_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(40)]).areas(inner);

        Paragraph::new(Line::from(spans)).render(keys_area, buf);

        let status = match self.state.status_message {
            Some(msg) => Span::styled(format!("{}  ", msg), Style::new().fg(COLOR_WARNING)),
            None => Span::styled(
                format!("tick {} ms  ", self.state.tick_interval.as_millis()),
                STYLE_MUTED,
            ),
        };
        Paragraph::new(Line::from(status))
            .alignment(Alignment::Right)
            .render(status_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::config::Config;
    use crate::indicator::ScriptedRandom;
    use crate::input::AppCommand;

    fn rendered(app: &App) -> String {
        let state = app.state();
        let area = Rect::new(0, 0, 140, 2);
        let mut buf = Buffer::empty(area);
        ActionsWidget::new(&state).render(area, &mut buf);
        buf.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_timer_label_follows_state() {
        let mut app = App::new(Config::default(), Box::new(ScriptedRandom::default())).unwrap();
        assert!(rendered(&app).contains("S Stop"));

        app.execute_command(AppCommand::ToggleTicking);
        let text = rendered(&app);
        assert!(text.contains("S Start"));
        assert!(text.contains("Indicator timer stopped"));
    }

    #[test]
    fn test_feed_key_range() {
        let app = App::new(Config::default(), Box::new(ScriptedRandom::default())).unwrap();
        assert!(rendered(&app).contains("1-3 Feeds"));
    }
}
