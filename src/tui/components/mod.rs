//! Reusable TUI components

pub mod forms;

pub use forms::{Dropdown, DropdownOption, InputType, TextInput};
