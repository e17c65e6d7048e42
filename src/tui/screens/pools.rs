//! Pools Screen Implementation
//!
//! Lists the liquidity pools returned by the API with their liquidity,
//! volume, and APR figures.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::pool::LiquidityPool;
use crate::tui::events::Event;

/// Current pools screen state
#[derive(Debug, Clone, Default)]
pub struct PoolsScreenState {
    /// List selection state
    pub list_state: ListState,
}

impl PoolsScreenState {
    /// Handle an event routed to this screen
    pub fn handle_event(&mut self, event: &Event, pool_count: usize) {
        if pool_count == 0 {
            return;
        }

        match event {
            Event::Up => {
                let current = self.list_state.selected().unwrap_or(0);
                let next = if current > 0 { current - 1 } else { pool_count - 1 };
                self.list_state.select(Some(next));
            }
            Event::Down => {
                let current = self.list_state.selected().unwrap_or(0);
                let next = if current + 1 < pool_count { current + 1 } else { 0 };
                self.list_state.select(Some(next));
            }
            _ => {}
        }
    }
}

/// Render the pools screen
pub fn render_pools(
    frame: &mut Frame,
    area: Rect,
    state: &mut PoolsScreenState,
    pools: Option<&[LiquidityPool]>,
) {
    let block = Block::default().borders(Borders::ALL).title("Liquidity Pools");

    let Some(pools) = pools else {
        let loading = Paragraph::new("Loading pools...")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(loading, area);
        return;
    };

    if pools.is_empty() {
        let empty = Paragraph::new("No pools available.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = pools
        .iter()
        .map(|pool| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    pool.pair_label(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!(
                        "  liquidity ${:.0}   volume 24h ${:.0}   fees 24h ${:.0}   APR {:.2}%",
                        pool.total_liquidity, pool.volume_24h, pool.fees_24h, pool.apr
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
