//! Indicator sidebar - one card per channel
//!
//! Card border, glyph and label colors come straight from the visual last
//! committed to the screen. A glowing indicator gets a thick border.

use crate::app::{AppState, IndicatorView};
use crate::constants::INDICATOR_CARD_HEIGHT;
use crate::ui::theme::{style_bold, COLOR_BG, STYLE_MUTED, STYLE_TITLE, SYMBOL_OFF, SYMBOL_ON};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub struct IndicatorsWidget<'a> {
    state: &'a AppState<'a>,
}

impl<'a> IndicatorsWidget<'a> {
    pub fn new(state: &'a AppState<'a>) -> Self {
        Self { state }
    }
}

impl Widget for IndicatorsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::NONE)
            .title(Span::styled(" Indicators ", STYLE_TITLE))
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        block.render(area, buf);

        let cards = Layout::vertical(
            self.state
                .indicators
                .iter()
                .map(|_| Constraint::Length(INDICATOR_CARD_HEIGHT)),
        )
        .flex(Flex::Center)
        .spacing(1)
        .split(inner);

        for (indicator, card_area) in self.state.indicators.iter().zip(cards.iter()) {
            render_card(indicator, *card_area, buf);
        }
    }
}

fn render_card(indicator: &IndicatorView<'_>, area: Rect, buf: &mut Buffer) {
    let Some(slot) = indicator.slot else {
        Block::default()
            .borders(Borders::ALL)
            .border_style(STYLE_MUTED)
            .title(indicator.name)
            .render(area, buf);
        return;
    };

    let visual = slot.visual;
    let border: Color = visual.border_color.into();
    let text: Color = visual.text_color.into();
    let icon: Color = slot.icon.map(|i| i.color.into()).unwrap_or(border);

    let border_type = if visual.glow_radius > 0 {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(COLOR_BG));

    let badge = if visual.is_on {
        Span::styled(format!("{} ON", SYMBOL_ON), Style::default().fg(border))
    } else {
        Span::styled(format!("{} OFF", SYMBOL_OFF), Style::default().fg(border))
    };

    let mut badge_line = vec![badge];
    if indicator.has_vector_icon && slot.icon.is_none() {
        // Icon asset missing: glyph only
        badge_line.push(Span::styled(" ·", STYLE_MUTED));
    }

    let lines = vec![
        Line::from(Span::styled(indicator.glyph, style_bold(icon))),
        Line::from(Span::styled(indicator.name, style_bold(text))),
        Line::from(badge_line),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block)
        .render(area, buf);
}
