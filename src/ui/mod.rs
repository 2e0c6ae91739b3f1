//! Terminal UI using ratatui
//!
//! Thin layer responsible only for terminal I/O. All console logic
//! is delegated to App via poll(), handle_key() and handle_scroll().

pub mod screen;
pub mod theme;
pub mod widgets;

use crate::app::App;
use crate::constants::{EVENT_LOG_HEIGHT, FRAME_DURATION_MS, SIDEBAR_WIDTH};
use crate::error::{ConsoleError, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Borders},
    Frame, Terminal,
};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use theme::{COLOR_BG, COLOR_SEPARATOR};
use widgets::{
    actions::ActionsWidget, feeds::FeedsWidget, indicators::IndicatorsWidget,
    log::EventLogWidget, title::TitleWidget,
};

/// Map io::Error to ConsoleError::Terminal
fn map_io_err(e: io::Error) -> ConsoleError {
    ConsoleError::Terminal { source: e }
}

/// Run the TUI event loop
///
/// Once raw mode is on, the terminal is restored on every exit path,
/// including a failed screen setup.
pub async fn run(app: &mut App) -> Result<()> {
    enable_raw_mode().map_err(map_io_err)?;

    let result = run_on_screen(app);

    let restored = disable_raw_mode()
        .and_then(|()| leave_screen(&mut io::stdout()))
        .map_err(map_io_err);

    result.and(restored)
}

fn run_on_screen(app: &mut App) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(map_io_err)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(map_io_err)?;

    event_loop(&mut terminal, app)
}

/// Leave the alternate screen, stop mouse capture and show the cursor
fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show)
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Fire the indicator timer when due
        app.poll(Instant::now());

        terminal.draw(|f| draw(f, app)).map_err(map_io_err)?;

        if event::poll(Duration::from_millis(FRAME_DURATION_MS)).map_err(map_io_err)? {
            match event::read().map_err(map_io_err)? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key) {
                        break;
                    }
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => app.handle_scroll(true),
                    MouseEventKind::ScrollDown => app.handle_scroll(false),
                    _ => {}
                },
                _ => {}
            }
        }

        if app.should_quit() {
            break;
        }
    }
    Ok(())
}

fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(COLOR_BG)), area);

    let [title_area, body_area, log_area, actions_area] = Layout::vertical([
        Constraint::Length(3),                // Title bar
        Constraint::Min(8),                   // Indicators | feeds
        Constraint::Length(EVENT_LOG_HEIGHT), // Event log
        Constraint::Length(2),                // Actions bar
    ])
    .areas(area);

    let [sidebar_area, separator_area, feeds_area] = Layout::horizontal([
        Constraint::Length(SIDEBAR_WIDTH),
        Constraint::Length(1),
        Constraint::Min(10),
    ])
    .areas(body_area);

    let state = app.state();

    frame.render_widget(TitleWidget::new(state.title), title_area);
    frame.render_widget(IndicatorsWidget::new(&state), sidebar_area);
    frame.render_widget(
        Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(COLOR_SEPARATOR)),
        separator_area,
    );
    frame.render_widget(FeedsWidget::new(&state), feeds_area);
    frame.render_widget(EventLogWidget::new(app.events()), log_area);
    frame.render_widget(ActionsWidget::new(&state), actions_area);
}
