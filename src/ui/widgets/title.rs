//! Title bar widget

use crate::ui::theme::{COLOR_CARD, STYLE_BORDER, STYLE_TITLE};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub struct TitleWidget<'a> {
    title: &'a str,
}

impl<'a> TitleWidget<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }
}

impl Widget for TitleWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(STYLE_BORDER)
            .style(Style::default().bg(COLOR_CARD));

        Paragraph::new(self.title)
            .style(STYLE_TITLE)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
