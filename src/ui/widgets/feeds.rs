//! Video area - toggle bar above the split feed panels
//!
//! Split sizes are the shares last committed to the screen; hidden panels
//! are not drawn at all.

use crate::app::{AppState, FeedView};
use crate::layout::FeedSource;
use crate::ui::theme::{
    COLOR_BG, STYLE_BORDER, STYLE_FEED_HEADER, STYLE_MUTED, STYLE_TEXT, STYLE_TOGGLE_OFF,
    STYLE_TOGGLE_ON, SYMBOL_CHECKED, SYMBOL_PLAYING, SYMBOL_UNCHECKED,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub struct FeedsWidget<'a> {
    state: &'a AppState<'a>,
}

impl<'a> FeedsWidget<'a> {
    pub fn new(state: &'a AppState<'a>) -> Self {
        Self { state }
    }

    fn render_toggles(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, feed) in self.state.feeds.iter().enumerate() {
            let (symbol, style) = if feed.visible {
                (SYMBOL_CHECKED, STYLE_TOGGLE_ON)
            } else {
                (SYMBOL_UNCHECKED, STYLE_TOGGLE_OFF)
            };
            spans.push(Span::styled(
                format!(" {} {} {} ", i + 1, symbol, feed.toggle_label),
                style,
            ));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Right)
            .render(area, buf);
    }

    fn render_split(&self, area: Rect, buf: &mut Buffer) {
        let primary = &self.state.primary;
        let panes: Vec<(Pane, u32)> = [
            (Pane::Primary, primary.visible, self.state.horizontal.first()),
            (Pane::Stack, self.state.stack_visible, self.state.horizontal.get(1)),
        ]
        .into_iter()
        .filter(|(_, visible, _)| *visible)
        .map(|(pane, _, share)| (pane, share.copied().unwrap_or(1)))
        .collect();

        if panes.is_empty() {
            let hint = format!(
                "All feeds hidden. Press 1-{} to show a feed.",
                self.state.feeds.len()
            );
            Paragraph::new(hint)
                .style(STYLE_MUTED)
                .alignment(Alignment::Center)
                .render(centered_line(area), buf);
            return;
        }

        let areas = Layout::horizontal(panes.iter().map(|(_, share)| fill(*share)))
            .spacing(1)
            .split(area);

        for ((pane, _), pane_area) in panes.iter().zip(areas.iter()) {
            match pane {
                Pane::Primary => render_feed(primary, *pane_area, buf),
                Pane::Stack => self.render_stack(*pane_area, buf),
            }
        }
    }

    fn render_stack(&self, area: Rect, buf: &mut Buffer) {
        let visible: Vec<(&FeedView<'_>, u32)> = self
            .state
            .secondary
            .iter()
            .zip(self.state.stack.iter())
            .filter(|(feed, _)| feed.visible)
            .map(|(feed, &share)| (feed, share))
            .collect();

        let areas = Layout::vertical(visible.iter().map(|(_, share)| fill(*share)))
            .spacing(1)
            .split(area);

        for ((feed, _), feed_area) in visible.iter().zip(areas.iter()) {
            render_feed(feed, *feed_area, buf);
        }
    }
}

#[derive(Clone, Copy)]
enum Pane {
    Primary,
    Stack,
}

impl Widget for FeedsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(3)])
            .spacing(1)
            .split(area);

        self.render_toggles(chunks[0], buf);
        self.render_split(chunks[1], buf);
    }
}

fn fill(share: u32) -> Constraint {
    Constraint::Fill(u16::try_from(share).unwrap_or(u16::MAX))
}

fn centered_line(area: Rect) -> Rect {
    let [line] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    line
}

fn render_feed(feed: &FeedView<'_>, area: Rect, buf: &mut Buffer) {
    let [header, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(area);

    Paragraph::new(feed.label)
        .style(STYLE_FEED_HEADER)
        .alignment(Alignment::Center)
        .render(header, buf);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(STYLE_BORDER)
        .style(Style::default().bg(COLOR_BG));
    let inner = block.inner(body);
    block.render(body, buf);

    let line = match feed.source {
        FeedSource::Stream(playback) => {
            let secs = playback.elapsed().as_secs();
            Line::from(vec![
                Span::styled(format!("{} ", SYMBOL_PLAYING), STYLE_TEXT),
                Span::styled(feed.source.describe(), STYLE_TEXT),
                Span::styled(
                    format!("  {:02}:{:02} loop", secs / 60, secs % 60),
                    STYLE_MUTED,
                ),
            ])
        }
        FeedSource::Placeholder => Line::from(Span::styled(feed.source.describe(), STYLE_MUTED)),
    };

    Paragraph::new(line)
        .alignment(Alignment::Center)
        .render(centered_line(inner), buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::config::Config;
    use crate::indicator::ScriptedRandom;
    use crate::input::AppCommand;

    fn rendered(app: &App, width: u16, height: u16) -> String {
        let state = app.state();
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        FeedsWidget::new(&state).render(area, &mut buf);
        buf.content.iter().map(|c| c.symbol()).collect()
    }

    fn app() -> App {
        App::new(Config::default(), Box::new(ScriptedRandom::default())).unwrap()
    }

    #[test]
    fn test_all_visible_draws_every_label() {
        let text = rendered(&app(), 120, 30);
        assert!(text.contains("Camera View"));
        assert!(text.contains("Bird's Eyes View"));
        assert!(text.contains("Radar View"));
    }

    #[test]
    fn test_hidden_feed_not_drawn() {
        let mut app = app();
        app.execute_command(AppCommand::ToggleFeed(1));
        let text = rendered(&app, 120, 30);
        assert!(!text.contains("Bird's Eyes View"));
        // Toggle stays in the bar
        assert!(text.contains("Radar View"));
    }

    #[test]
    fn test_all_hidden_shows_hint() {
        let mut app = app();
        for i in 0..3 {
            app.execute_command(AppCommand::ToggleFeed(i));
        }
        let text = rendered(&app, 120, 30);
        assert!(text.contains("All feeds hidden"));
    }
}
