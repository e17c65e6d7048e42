//! Top-level UI rendering
//!
//! Lays out the header with screen tabs, the active screen body, and the
//! status bar.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::tui::app::{App, NavigationMode, Screen};
use crate::tui::screens::{farms::render_farms, pools::render_pools, swap::render_swap};

/// Render the whole UI
pub fn render_ui(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(10),   // body
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);

    match app.current_screen {
        Screen::Swap => render_swap(frame, chunks[1], &mut app.swap_screen),
        Screen::Pools => {
            render_pools(frame, chunks[1], &mut app.pools_screen, app.pools.as_deref())
        }
        Screen::Farms => {
            render_farms(frame, chunks[1], &mut app.farms_screen, app.gauges.as_deref())
        }
    }

    render_status_bar(frame, chunks[2], app);
}

fn render_header(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let titles: Vec<Line> = Screen::all()
        .iter()
        .map(|screen| Line::from(screen.display_name()))
        .collect();

    let selected = Screen::all()
        .iter()
        .position(|s| *s == app.current_screen)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    " slope.ski ",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

fn render_status_bar(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let hints = match app.navigation_mode {
        NavigationMode::ScreenLevel => "Tab: switch screen | Enter: select | F5: refresh | q: quit",
        NavigationMode::WithinScreen => "Tab: next input | Enter: confirm | Esc: back | q: quit",
    };

    let mut spans = vec![Span::styled(hints, Style::default().fg(Color::DarkGray))];

    if let Some(message) = &app.status_message {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(last_refresh) = app.last_refresh {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(
            format!("updated {}", last_refresh.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let status = Paragraph::new(Line::from(spans));
    frame.render_widget(status, area);
}
