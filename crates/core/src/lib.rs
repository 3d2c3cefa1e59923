//! Core inventory logic - pure, deterministic, and testable
//!
//! This crate contains the two bounded containers and the operations that
//! move pieces between them. It has **zero dependencies** on UI or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Unit tests cover every operation and rejection path
//! - **Portable**: Can drive any front end (terminal menu, scripted, headless)
//!
//! # Module Structure
//!
//! - [`queue`]: circular FIFO of the five upcoming pieces
//! - [`stack`]: bounded LIFO reserve of up to three pieces
//! - [`inventory`]: the five player operations over both containers
//! - [`rng`]: seeded LCG and the piece factory that stamps unique ids
//! - [`snapshot`]: read-only contents handed to views
//!
//! # Operation Rules
//!
//! - **Play**: dequeue the front piece, generate a replacement
//! - **Reserve**: move the front piece to the reserve, generate a replacement
//! - **Restore**: return the reserve top to the queue rear (no generation)
//! - **Swap front/top**: exchange queue front and reserve top in place
//! - **Swap three**: exchange the three frontmost queue pieces with a full
//!   reserve, index for index
//!
//! Every operation is a total function: a failed precondition yields a
//! [`inventory::ActionOutcome::Rejected`] value and no mutation. Nothing in
//! this crate panics.
//!
//! # Example
//!
//! ```
//! use piece_inventory_core::{ActionOutcome, Inventory};
//!
//! // Create an inventory; the queue starts pre-filled to capacity.
//! let mut inventory = Inventory::new(12345);
//! assert!(inventory.queue().is_full());
//!
//! // Play the front piece; the queue is refilled with a fresh one.
//! match inventory.play() {
//!     ActionOutcome::Played(piece) => assert!(piece.id >= 1),
//!     outcome => panic!("unexpected outcome: {outcome:?}"),
//! }
//! assert!(inventory.queue().is_full());
//! ```

pub mod inventory;
pub mod queue;
pub mod rng;
pub mod snapshot;
pub mod stack;

pub use piece_inventory_types as types;

// Re-export commonly used types for convenience
pub use inventory::{ActionOutcome, Inventory, Rejection, StructureKind};
pub use queue::PieceQueue;
pub use rng::{PieceFactory, SimpleRng};
pub use snapshot::InventorySnapshot;
pub use stack::ReserveStack;
