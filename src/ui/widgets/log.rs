//! Event log widget - scrollable list of console events

use crate::logging::{EventEntry, EventKind, EventLog};
use crate::ui::theme::{
    COLOR_HEADER, COLOR_MUTED, COLOR_TEXT, STYLE_BORDER, STYLE_MUTED, STYLE_TEXT, STYLE_TITLE,
    SYMBOL_OFF, SYMBOL_ON,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
        StatefulWidget, Widget,
    },
};

pub struct EventLogWidget<'a> {
    log: &'a EventLog,
}

impl<'a> EventLogWidget<'a> {
    pub fn new(log: &'a EventLog) -> Self {
        Self { log }
    }
}

impl Widget for EventLogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner_height = area.height.saturating_sub(2) as usize;
        let total_lines = self.log.filtered_count();
        let scroll = self.log.scroll_position();

        let start = scroll.saturating_sub(inner_height.saturating_sub(1));
        let end = (start + inner_height).min(total_lines);

        let lines: Vec<Line> = self
            .log
            .filtered()
            .skip(start)
            .take(end.saturating_sub(start))
            .map(format_entry)
            .collect();

        let filter = Line::from(Span::styled(
            format!(" F {} ", self.log.filter().label()),
            STYLE_MUTED,
        ));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(STYLE_BORDER)
            .title(Span::styled(" Event Log ", STYLE_TITLE))
            .title_bottom(filter);

        Paragraph::new(lines).block(block).render(area, buf);

        if total_lines > inner_height && area.width > 0 {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"));
            let mut scrollbar_state = ScrollbarState::new(total_lines).position(scroll);

            let scrollbar_area = Rect {
                x: area.x + area.width - 1,
                y: area.y + 1,
                width: 1,
                height: area.height.saturating_sub(2),
            };

            scrollbar.render(scrollbar_area, buf, &mut scrollbar_state);
        }
    }
}

/// Format an entry into a styled Line
fn format_entry(entry: &EventEntry) -> Line<'static> {
    let (tag, tag_style, message_style) = match &entry.kind {
        EventKind::Indicator { is_on, .. } => {
            let symbol = if *is_on { SYMBOL_ON } else { SYMBOL_OFF };
            let color = if *is_on { COLOR_HEADER } else { COLOR_MUTED };
            (symbol, Style::new().fg(color), STYLE_TEXT)
        }
        EventKind::Feed { .. } => ("▣", Style::new().fg(COLOR_TEXT), STYLE_TEXT),
        EventKind::System { .. } => ("·", STYLE_MUTED, STYLE_MUTED),
    };

    Line::from(vec![
        Span::styled(format!(" {} ", entry.timestamp), STYLE_MUTED),
        Span::styled(format!("{} ", tag), tag_style),
        Span::styled(entry.message(), message_style),
    ])
}
