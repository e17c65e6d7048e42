//! Form Input Components
//!
//! Reusable form inputs for the TUI: a text input backed by `tui-input`
//! with amount validation, and a dropdown used for token selection. The
//! dropdown carries an optional placeholder row ("Select Token") that is
//! shown while nothing is selected but can never be selected itself,
//! mirroring the disabled first option of the web frontend's selects.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use tui_input::{Input, InputRequest, InputResponse};

use crate::tui::utils::validation;

/// Input validation types
#[derive(Debug, Clone, PartialEq)]
pub enum InputType {
    /// Any text input
    Text,
    /// Numeric amount with decimal support
    Amount,
}

/// Text input component with validation
#[derive(Debug, Clone)]
pub struct TextInput {
    /// The underlying tui-input component
    input: Input,
    /// Label for the input field
    label: String,
    /// Whether the input is focused
    focused: bool,
    /// Validation error message
    error: Option<String>,
    /// Input type for validation
    input_type: InputType,
    /// Whether the input is required
    required: bool,
    /// Placeholder text
    placeholder: String,
}

impl TextInput {
    /// Create a new text input with a label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            input: Input::default(),
            label: label.into(),
            focused: false,
            error: None,
            input_type: InputType::Text,
            required: false,
            placeholder: String::new(),
        }
    }

    /// Set the input type for validation
    pub fn with_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Mark the input as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the current value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.input = Input::default().with_value(value.into());
        self
    }

    /// Set the current value of the input field.
    pub fn set_value(&mut self, value: &str) {
        self.input = self.input.clone().with_value(value.to_string());
    }

    /// Set focus state
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Check if this input is focused
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Get the current value
    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Clear the input
    pub fn clear(&mut self) {
        self.input = Input::default();
        self.error = None;
    }

    /// Handle keyboard input
    ///
    /// Amount inputs only accept digits and a decimal point, the same
    /// constraint a numeric form field applies before the value ever
    /// reaches the swap form.
    pub fn handle_input(&mut self, request: InputRequest) -> InputResponse {
        if self.input_type == InputType::Amount {
            if let InputRequest::InsertChar(c) = request {
                if !c.is_ascii_digit() && c != '.' {
                    return None;
                }
            }
        }

        let response = self.input.handle(request);
        // Clear error when user starts typing
        if matches!(request, InputRequest::InsertChar(_)) {
            self.error = None;
        }
        self.validate();
        response
    }

    /// Validate the current input
    pub fn validate(&mut self) -> bool {
        self.error = None;

        let value = self.input.value().trim().to_string();

        // Check if required field is empty
        if self.required && value.is_empty() {
            self.error = Some("This field is required".to_string());
            return false;
        }

        // Skip validation for empty optional fields
        if value.is_empty() {
            return true;
        }

        match self.input_type {
            InputType::Text => true,
            InputType::Amount => match validation::validate_amount(&value) {
                Ok(_) => true,
                Err(message) => {
                    self.error = Some(message);
                    false
                }
            },
        }
    }

    /// Get validation error if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Check if input is valid
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Render the input
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let border_style = if self.error.is_some() {
            Style::default().fg(Color::Red)
        } else if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.label.clone())
            .border_style(border_style);

        let content = if self.input.value().is_empty() && !self.placeholder.is_empty() {
            Line::from(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(Span::raw(self.input.value().to_string()))
        };

        let paragraph = Paragraph::new(content).block(block);
        frame.render_widget(paragraph, area);

        if self.focused {
            let cursor_x = area.x + 1 + self.input.visual_cursor() as u16;
            frame.set_cursor_position((cursor_x.min(area.x + area.width.saturating_sub(2)), area.y + 1));
        }
    }
}

/// Option for dropdown component
#[derive(Debug, Clone)]
pub struct DropdownOption<T> {
    /// Display text for the option
    pub text: String,
    /// The actual value
    pub value: T,
}

impl<T> DropdownOption<T> {
    /// Create a new dropdown option
    pub fn new(text: impl Into<String>, value: T) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }
}

/// Dropdown component for selections
#[derive(Debug, Clone)]
pub struct Dropdown<T> {
    /// Label for the dropdown
    label: String,
    /// Available options
    options: Vec<DropdownOption<T>>,
    /// Currently selected option index
    selected: Option<usize>,
    /// Whether the dropdown is open
    open: bool,
    /// Whether the dropdown is focused
    focused: bool,
    /// List state for scrolling
    list_state: ListState,
    /// Placeholder shown while nothing is selected
    placeholder: String,
    /// Currently highlighted option when open
    highlighted: Option<usize>,
}

impl<T: Clone> Dropdown<T> {
    /// Create a new dropdown with a label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            options: Vec::new(),
            selected: None,
            open: false,
            focused: false,
            list_state: ListState::default(),
            placeholder: String::new(),
            highlighted: None,
        }
    }

    /// Add an option to the dropdown
    pub fn add_option(mut self, option: DropdownOption<T>) -> Self {
        self.options.push(option);
        self
    }

    /// Set the placeholder shown while nothing is selected
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set focus state
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.open = false;
            self.highlighted = None;
        }
    }

    /// Check if this dropdown is focused
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Check if this dropdown is open
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle dropdown open/closed
    pub fn toggle(&mut self) {
        if self.focused && !self.options.is_empty() {
            self.open = !self.open;
            if self.open {
                // Set initial highlight to selected item or first item
                let initial_highlight = self.selected.unwrap_or(0);
                self.highlighted = Some(initial_highlight);
                self.list_state.select(Some(initial_highlight));
            } else {
                self.highlighted = None;
            }
        }
    }

    /// Move highlight up in the open dropdown
    pub fn move_up(&mut self) {
        if self.open && !self.options.is_empty() {
            let current = self.highlighted.unwrap_or(0);
            let new_highlighted = if current > 0 {
                current - 1
            } else {
                self.options.len() - 1
            };
            self.highlighted = Some(new_highlighted);
            self.list_state.select(Some(new_highlighted));
        }
    }

    /// Move highlight down in the open dropdown
    pub fn move_down(&mut self) {
        if self.open && !self.options.is_empty() {
            let current = self.highlighted.unwrap_or(0);
            let new_highlighted = if current + 1 < self.options.len() {
                current + 1
            } else {
                0
            };
            self.highlighted = Some(new_highlighted);
            self.list_state.select(Some(new_highlighted));
        }
    }

    /// Select the currently highlighted option
    pub fn select_current(&mut self) {
        if self.open {
            if let Some(highlighted) = self.highlighted {
                if highlighted < self.options.len() {
                    self.selected = Some(highlighted);
                    self.open = false;
                    self.highlighted = None;
                }
            }
        }
    }

    /// Select the option carrying the given value, if present
    pub fn select_value(&mut self, value: &T)
    where
        T: PartialEq,
    {
        if let Some(index) = self.options.iter().position(|opt| &opt.value == value) {
            self.selected = Some(index);
        }
    }

    /// Get the selected value
    pub fn selected_value(&self) -> Option<&T> {
        self.selected
            .and_then(|idx| self.options.get(idx))
            .map(|opt| &opt.value)
    }

    /// Get the selected option text
    pub fn selected_text(&self) -> Option<&str> {
        self.selected
            .and_then(|idx| self.options.get(idx))
            .map(|opt| opt.text.as_str())
    }

    /// Number of options
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the dropdown has no options
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Render the dropdown; when open, the option list is drawn as a
    /// popup directly below the field
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.label.clone())
            .border_style(border_style);

        let content = match self.selected_text() {
            Some(text) => Line::from(Span::raw(format!("{} ▾", text))),
            None => Line::from(Span::styled(
                format!("{} ▾", self.placeholder),
                Style::default().fg(Color::DarkGray),
            )),
        };

        let paragraph = Paragraph::new(content).block(block);
        frame.render_widget(paragraph, area);

        if self.open {
            let height = (self.options.len() as u16).min(6) + 2;
            let max_y = frame.area().height.saturating_sub(height);
            let popup = Rect {
                x: area.x,
                y: (area.y + area.height).min(max_y),
                width: area.width,
                height,
            };

            let items: Vec<ListItem> = self
                .options
                .iter()
                .map(|opt| ListItem::new(opt.text.clone()))
                .collect();

            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Yellow)),
                )
                .highlight_style(
                    Style::default()
                        .bg(Color::Blue)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");

            frame.render_widget(Clear, popup);
            frame.render_stateful_widget(list, popup, &mut self.list_state);
        }
    }
}
