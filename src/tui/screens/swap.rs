//! Swap Screen Implementation
//!
//! The swap interface: source and destination token dropdowns, the
//! amount entry, the mirrored receive display, and the invert control.
//! All state transitions go through the [`SwapForm`] owned by this
//! screen; the screen itself only decides which widget a key belongs to.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};
use tui_input::InputRequest;

use crate::error::Error;
use crate::swap::SwapForm;
use crate::token::TokenCatalog;
use crate::tui::components::forms::{Dropdown, DropdownOption, InputType, TextInput};
use crate::tui::events::Event;

/// Input focus states for the swap screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwapInputFocus {
    FromToken,
    Amount,
    Invert,
    ToToken,
    Execute,
}

/// Current swap screen state
#[derive(Debug, Clone)]
pub struct SwapScreenState {
    /// Current input focus
    pub input_focus: SwapInputFocus,
    /// The swap form, present once a catalog has been loaded
    pub form: Option<SwapForm>,
    /// Amount entry
    pub amount_input: TextInput,
    /// Source token dropdown
    pub from_dropdown: Dropdown<String>,
    /// Destination token dropdown
    pub to_dropdown: Dropdown<String>,
}

impl Default for SwapScreenState {
    fn default() -> Self {
        let amount_input = TextInput::new("Amount")
            .with_type(InputType::Amount)
            .with_placeholder("0.0");

        let from_dropdown = Dropdown::new("From Token").with_placeholder("Select Token");
        let to_dropdown = Dropdown::new("To Token").with_placeholder("Select Token");

        Self {
            input_focus: SwapInputFocus::FromToken,
            form: None,
            amount_input,
            from_dropdown,
            to_dropdown,
        }
    }
}

impl SwapScreenState {
    /// Build the swap form and its dropdowns from a loaded catalog.
    ///
    /// Configured default selections are honored when given; otherwise
    /// the form falls back to the first two catalog entries. Called once
    /// per session: a later data refresh must not clobber selections the
    /// user already made.
    pub fn initialize(
        &mut self,
        catalog: &TokenCatalog,
        default_from: Option<&str>,
        default_to: Option<&str>,
    ) -> Result<(), Error> {
        let form = match (default_from, default_to) {
            (None, None) => SwapForm::new(catalog.clone()),
            (from, to) => {
                let from = from.unwrap_or(catalog.symbols()[0].as_str());
                let to = to.unwrap_or(catalog.symbols()[1].as_str());
                SwapForm::with_defaults(catalog.clone(), from, to)?
            }
        };

        let mut from_dropdown = Dropdown::new("From Token").with_placeholder("Select Token");
        let mut to_dropdown = Dropdown::new("To Token").with_placeholder("Select Token");
        for token in catalog.iter() {
            from_dropdown = from_dropdown.add_option(DropdownOption::new(token, token.to_string()));
            to_dropdown = to_dropdown.add_option(DropdownOption::new(token, token.to_string()));
        }

        from_dropdown.select_value(&form.from_token().to_string());
        to_dropdown.select_value(&form.to_token().to_string());

        self.form = Some(form);
        self.from_dropdown = from_dropdown;
        self.to_dropdown = to_dropdown;
        self.set_focus();
        Ok(())
    }

    /// Whether the screen has a form to interact with
    pub fn is_ready(&self) -> bool {
        self.form.is_some()
    }

    /// Move focus to next input
    pub fn next_focus(&mut self) {
        self.clear_focus();
        self.input_focus = match self.input_focus {
            SwapInputFocus::FromToken => SwapInputFocus::Amount,
            SwapInputFocus::Amount => SwapInputFocus::Invert,
            SwapInputFocus::Invert => SwapInputFocus::ToToken,
            SwapInputFocus::ToToken => SwapInputFocus::Execute,
            SwapInputFocus::Execute => SwapInputFocus::FromToken,
        };
        self.set_focus();
    }

    /// Move focus to previous input
    pub fn previous_focus(&mut self) {
        self.clear_focus();
        self.input_focus = match self.input_focus {
            SwapInputFocus::FromToken => SwapInputFocus::Execute,
            SwapInputFocus::Amount => SwapInputFocus::FromToken,
            SwapInputFocus::Invert => SwapInputFocus::Amount,
            SwapInputFocus::ToToken => SwapInputFocus::Invert,
            SwapInputFocus::Execute => SwapInputFocus::ToToken,
        };
        self.set_focus();
    }

    /// Whether either token dropdown is currently open
    pub fn has_open_dropdown(&self) -> bool {
        self.from_dropdown.is_open() || self.to_dropdown.is_open()
    }

    /// Close any open dropdown, keeping focus on the current control
    pub fn close_dropdowns(&mut self) {
        self.from_dropdown.set_focused(false);
        self.to_dropdown.set_focused(false);
        self.set_focus();
    }

    /// Clear focus from all inputs
    fn clear_focus(&mut self) {
        self.amount_input.set_focused(false);
        self.from_dropdown.set_focused(false);
        self.to_dropdown.set_focused(false);
    }

    /// Set focus on current input
    fn set_focus(&mut self) {
        match self.input_focus {
            SwapInputFocus::FromToken => self.from_dropdown.set_focused(true),
            SwapInputFocus::Amount => self.amount_input.set_focused(true),
            SwapInputFocus::ToToken => self.to_dropdown.set_focused(true),
            // Button focus is carried by input_focus alone
            SwapInputFocus::Invert | SwapInputFocus::Execute => {}
        }
    }

    /// Handle an event routed to this screen; returns a status message
    /// for the status bar when the action produces one
    pub fn handle_event(&mut self, event: &Event) -> Option<String> {
        if !self.is_ready() {
            return None;
        }

        match event {
            Event::Tab => {
                self.next_focus();
                None
            }
            Event::BackTab => {
                self.previous_focus();
                None
            }
            Event::Up => {
                match self.input_focus {
                    SwapInputFocus::FromToken => self.from_dropdown.move_up(),
                    SwapInputFocus::ToToken => self.to_dropdown.move_up(),
                    _ => {}
                }
                None
            }
            Event::Down => {
                match self.input_focus {
                    SwapInputFocus::FromToken => self.from_dropdown.move_down(),
                    SwapInputFocus::ToToken => self.to_dropdown.move_down(),
                    _ => {}
                }
                None
            }
            Event::Enter => self.handle_enter(),
            Event::Char(c) => {
                if self.input_focus == SwapInputFocus::Amount {
                    self.amount_input.handle_input(InputRequest::InsertChar(*c));
                    self.sync_amount();
                }
                None
            }
            Event::Backspace => {
                self.amount_edit(InputRequest::DeletePrevChar);
                None
            }
            Event::Delete => {
                self.amount_edit(InputRequest::DeleteNextChar);
                None
            }
            Event::Home => {
                self.amount_edit(InputRequest::GoToStart);
                None
            }
            Event::End => {
                self.amount_edit(InputRequest::GoToEnd);
                None
            }
            Event::Left => {
                self.amount_edit(InputRequest::GoToPrevChar);
                None
            }
            Event::Right => {
                self.amount_edit(InputRequest::GoToNextChar);
                None
            }
            _ => None,
        }
    }

    fn handle_enter(&mut self) -> Option<String> {
        match self.input_focus {
            SwapInputFocus::FromToken => {
                if self.from_dropdown.is_open() {
                    self.from_dropdown.select_current();
                    let symbol = self.from_dropdown.selected_value().cloned();
                    if let (Some(form), Some(symbol)) = (self.form.as_mut(), symbol) {
                        form.select_from(&symbol);
                    }
                } else {
                    self.from_dropdown.toggle();
                }
                None
            }
            SwapInputFocus::ToToken => {
                if self.to_dropdown.is_open() {
                    self.to_dropdown.select_current();
                    let symbol = self.to_dropdown.selected_value().cloned();
                    if let (Some(form), Some(symbol)) = (self.form.as_mut(), symbol) {
                        form.select_to(&symbol);
                    }
                } else {
                    self.to_dropdown.toggle();
                }
                None
            }
            SwapInputFocus::Invert => {
                self.invert();
                None
            }
            SwapInputFocus::Amount => None,
            SwapInputFocus::Execute => {
                Some("Swap submission is not wired to an execution backend".to_string())
            }
        }
    }

    /// Exchange the token selections and mirror the result back into the
    /// dropdowns. Amounts stay where they are.
    pub fn invert(&mut self) {
        if let Some(form) = self.form.as_mut() {
            form.invert();
            let from = form.from_token().to_string();
            let to = form.to_token().to_string();
            self.from_dropdown.select_value(&from);
            self.to_dropdown.select_value(&to);
        }
    }

    fn amount_edit(&mut self, request: InputRequest) {
        if self.input_focus == SwapInputFocus::Amount {
            self.amount_input.handle_input(request);
            self.sync_amount();
        }
    }

    fn sync_amount(&mut self) {
        let value = self.amount_input.value().to_string();
        if let Some(form) = self.form.as_mut() {
            form.set_amount_in(&value);
        }
    }
}

/// Render the swap screen
pub fn render_swap(frame: &mut Frame, area: Rect, state: &mut SwapScreenState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Swap")
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(form) = state.form.clone() else {
        let loading = Paragraph::new("Loading pools...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(loading, inner);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tagline
            Constraint::Length(3), // from row
            Constraint::Length(3), // invert button
            Constraint::Length(3), // to row
            Constraint::Length(4), // details
            Constraint::Length(3), // execute button
            Constraint::Min(0),
        ])
        .split(inner);

    let tagline = Paragraph::new(Span::styled(
        "Stable swaps on the slopes",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(tagline, rows[0]);

    let from_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    let to_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[3]);

    // Invert button
    let invert_style = if state.input_focus == SwapInputFocus::Invert {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let invert = Paragraph::new("↓↑")
        .alignment(Alignment::Center)
        .style(invert_style)
        .block(Block::default().borders(Borders::ALL));
    let invert_area = Rect {
        x: rows[2].x + (rows[2].width / 2).saturating_sub(3),
        y: rows[2].y,
        width: 6.min(rows[2].width),
        height: rows[2].height,
    };
    frame.render_widget(invert, invert_area);

    // Receive display mirrors the entered amount and is not editable
    let receive_value = if form.amount_out().is_empty() {
        Span::styled("0.0", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(form.amount_out().to_string())
    };
    let receive = Paragraph::new(Line::from(receive_value)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("You Will Receive")
            .border_style(Style::default().fg(Color::Gray)),
    );
    frame.render_widget(receive, to_row[0]);

    // Static route details, as on the web swap card
    let details = Paragraph::new(vec![
        Line::from(format!(
            "Pair:               {} -> {}",
            form.from_token(),
            form.to_token()
        )),
        Line::from("Routed through:     Curve"),
        Line::from("Slippage tolerance: 0.5%"),
    ])
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(details, rows[4]);

    // Execute button
    let execute_style = if state.input_focus == SwapInputFocus::Execute {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let execute = Paragraph::new("Ski Swap")
        .alignment(Alignment::Center)
        .style(execute_style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(execute, rows[5]);

    // Inputs last so an open dropdown popup draws over the rows below it
    state.amount_input.render(frame, from_row[0]);
    state.to_dropdown.render(frame, to_row[1]);
    state.from_dropdown.render(frame, from_row[1]);
}
