//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::MenuAction`] choices for
//! the inventory menu. Independent of any rendering layer.

pub mod map;

pub use piece_inventory_types as types;

pub use map::{handle_key_event, should_quit};
