//! Read-only snapshot of the inventory for rendering.

use arrayvec::ArrayVec;
use crate::types::{Piece, QUEUE_CAPACITY, STACK_CAPACITY};

/// Ordered contents of both containers at one point in time.
///
/// `upcoming` runs front-to-rear, `reserved` runs bottom-to-top. Taking a
/// snapshot never mutates the live containers, so views stay pure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventorySnapshot {
    pub upcoming: ArrayVec<Piece, QUEUE_CAPACITY>,
    pub reserved: ArrayVec<Piece, STACK_CAPACITY>,
}
