//! Farms Screen Implementation
//!
//! Lists the staking gauges returned by the API.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::pool::StakingGauge;
use crate::tui::events::Event;

/// Current farms screen state
#[derive(Debug, Clone, Default)]
pub struct FarmsScreenState {
    /// List selection state
    pub list_state: ListState,
}

impl FarmsScreenState {
    /// Handle an event routed to this screen
    pub fn handle_event(&mut self, event: &Event, gauge_count: usize) {
        if gauge_count == 0 {
            return;
        }

        match event {
            Event::Up => {
                let current = self.list_state.selected().unwrap_or(0);
                let next = if current > 0 { current - 1 } else { gauge_count - 1 };
                self.list_state.select(Some(next));
            }
            Event::Down => {
                let current = self.list_state.selected().unwrap_or(0);
                let next = if current + 1 < gauge_count { current + 1 } else { 0 };
                self.list_state.select(Some(next));
            }
            _ => {}
        }
    }
}

/// Render the farms screen
pub fn render_farms(
    frame: &mut Frame,
    area: Rect,
    state: &mut FarmsScreenState,
    gauges: Option<&[StakingGauge]>,
) {
    let block = Block::default().borders(Borders::ALL).title("Farms");

    let Some(gauges) = gauges else {
        let loading = Paragraph::new("Loading farms...")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(loading, area);
        return;
    };

    if gauges.is_empty() {
        let empty = Paragraph::new("No farms available.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = gauges
        .iter()
        .map(|gauge| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    gauge.lp_token_symbol.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!(
                        "  APR {:.2}%   total staked ${:.0}",
                        gauge.apr, gauge.total_staked
                    ),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut state.list_state);
}
