//! Event Handling System
//!
//! This module manages keyboard events for the TUI application, providing
//! a structured way to handle user input and internally generated events
//! such as periodic data refreshes.

#[cfg(feature = "tui")]
use crossterm::event::{self, KeyCode, KeyEvent, KeyModifiers};

#[cfg(feature = "tui")]
use std::time::Duration;
#[cfg(feature = "tui")]
use tokio::sync::mpsc;

/// Application events that can be handled
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Quit the application
    Quit,
    /// Navigate to next tab or input
    Tab,
    /// Navigate to previous tab or input (Shift+Tab)
    BackTab,
    /// Enter/confirm action
    Enter,
    /// Escape/cancel action
    Escape,
    /// Arrow key navigation
    Up,
    Down,
    Left,
    Right,
    /// Character input
    Char(char),
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Home key
    Home,
    /// End key
    End,
    /// Function keys
    F(u8),
    /// Refresh pool and gauge data (F5 or the background ticker)
    Refresh,
}

/// Event handler for processing terminal events
#[cfg(feature = "tui")]
pub struct EventHandler {
    /// Receiver for events
    receiver: mpsc::UnboundedReceiver<Event>,
    /// Sender for events (for internally generated events)
    sender: mpsc::UnboundedSender<Event>,
    /// Handle for the background terminal event processing task
    _terminal_task: tokio::task::JoinHandle<()>,
}

#[cfg(feature = "tui")]
impl EventHandler {
    /// Create a new event handler
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        // Spawn a task to handle terminal events
        let event_sender = sender.clone();
        let terminal_task = tokio::spawn(async move {
            loop {
                // Poll for events with a timeout to avoid blocking
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    if let Ok(terminal_event) = event::read() {
                        if let Some(app_event) = Self::convert_terminal_event(terminal_event) {
                            if event_sender.send(app_event).is_err() {
                                break; // Channel closed, exit the loop
                            }
                        }
                    }
                }

                // Small delay to prevent high CPU usage
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        });

        Self {
            receiver,
            sender,
            _terminal_task: terminal_task,
        }
    }

    /// Get a sender for injecting events (used by the refresh ticker)
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sender.clone()
    }

    /// Get the next event
    pub async fn next(&mut self) -> Result<Event, Box<dyn std::error::Error + Send + Sync>> {
        self.receiver
            .recv()
            .await
            .ok_or_else(|| "Event channel closed".into())
    }

    /// Convert a terminal event to an application event
    fn convert_terminal_event(terminal_event: event::Event) -> Option<Event> {
        match terminal_event {
            event::Event::Key(key_event) => Self::convert_key_event(key_event),
            _ => None,
        }
    }

    /// Convert a key event to an application event
    pub(crate) fn convert_key_event(key_event: KeyEvent) -> Option<Event> {
        match key_event {
            // Quit events
            KeyEvent {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::NONE,
                ..
            } => Some(Event::Quit),

            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => Some(Event::Quit),

            // Tab navigation
            KeyEvent {
                code: KeyCode::Tab,
                modifiers: KeyModifiers::NONE,
                ..
            } => Some(Event::Tab),

            KeyEvent {
                code: KeyCode::BackTab,
                modifiers: KeyModifiers::SHIFT,
                ..
            } => Some(Event::BackTab),

            // Action keys
            KeyEvent {
                code: KeyCode::Enter,
                modifiers: KeyModifiers::NONE,
                ..
            } => Some(Event::Enter),

            KeyEvent {
                code: KeyCode::Esc,
                modifiers: KeyModifiers::NONE,
                ..
            } => Some(Event::Escape),

            // Arrow keys
            KeyEvent {
                code: KeyCode::Up, ..
            } => Some(Event::Up),

            KeyEvent {
                code: KeyCode::Down,
                ..
            } => Some(Event::Down),

            KeyEvent {
                code: KeyCode::Left,
                ..
            } => Some(Event::Left),

            KeyEvent {
                code: KeyCode::Right,
                ..
            } => Some(Event::Right),

            // Editing keys
            KeyEvent {
                code: KeyCode::Backspace,
                ..
            } => Some(Event::Backspace),

            KeyEvent {
                code: KeyCode::Delete,
                ..
            } => Some(Event::Delete),

            KeyEvent {
                code: KeyCode::Home,
                ..
            } => Some(Event::Home),

            KeyEvent {
                code: KeyCode::End,
                ..
            } => Some(Event::End),

            // Refresh on F5, other function keys pass through
            KeyEvent {
                code: KeyCode::F(5),
                ..
            } => Some(Event::Refresh),

            KeyEvent {
                code: KeyCode::F(n),
                ..
            } => Some(Event::F(n)),

            // Plain character input
            KeyEvent {
                code: KeyCode::Char(c),
                modifiers,
                ..
            } if modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT => {
                Some(Event::Char(c))
            }

            _ => None,
        }
    }
}

#[cfg(feature = "tui")]
impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
