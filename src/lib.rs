//! Piece inventory (workspace facade crate).
//!
//! This package keeps the `piece_inventory::{core,input,term,types}` public
//! API stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use piece_inventory_core as core;
pub use piece_inventory_input as input;
pub use piece_inventory_term as term;
pub use piece_inventory_types as types;
