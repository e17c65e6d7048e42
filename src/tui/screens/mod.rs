//! TUI screens

pub mod farms;
pub mod pools;
pub mod swap;

pub use farms::FarmsScreenState;
pub use pools::PoolsScreenState;
pub use swap::{SwapInputFocus, SwapScreenState};
