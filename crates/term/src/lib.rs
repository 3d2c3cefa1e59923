//! Terminal menu rendering module.
//!
//! A small, line-oriented rendering layer for the inventory menu.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render the menu through a pure view that unit tests can inspect
//! - Confine crossterm I/O to [`screen::TerminalScreen`]

pub mod menu_view;
pub mod screen;
pub mod style;

pub use piece_inventory_core as core;
pub use piece_inventory_types as types;

pub use menu_view::{outcome_line, piece_color, render_menu};
pub use screen::TerminalScreen;
pub use style::{Line, Rgb, Span, TextStyle};
