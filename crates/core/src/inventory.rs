//! Inventory module - the five player operations.
//!
//! Ties the queue, the reserve stack, and the piece factory together. Every
//! operation is total: failed preconditions produce a `Rejected` outcome and
//! leave both containers untouched.

use crate::types::{MenuAction, Piece, SWAP_COUNT};

use crate::queue::PieceQueue;
use crate::rng::PieceFactory;
use crate::snapshot::InventorySnapshot;
use crate::stack::ReserveStack;

/// Which container a rejection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureKind {
    Queue,
    Stack,
}

/// Why an operation performed no mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty(StructureKind),
    Full(StructureKind),
    /// The three-piece swap needs at least three upcoming pieces and a
    /// completely full reserve.
    NotEnoughPieces,
}

/// Result of one player operation.
///
/// `Rejected` means state was left exactly as it was. The swap variant
/// reports the post-swap pieces at both positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Played(Piece),
    Reserved(Piece),
    Restored(Piece),
    SwappedFrontTop { queue_front: Piece, stack_top: Piece },
    SwappedThree,
    Rejected(Rejection),
}

/// The complete piece inventory: upcoming queue, reserve stack, and the
/// factory that replenishes the queue.
#[derive(Debug, Clone)]
pub struct Inventory {
    queue: PieceQueue,
    stack: ReserveStack,
    factory: PieceFactory,
}

impl Inventory {
    /// Create an inventory with the queue pre-filled to capacity.
    pub fn new(seed: u32) -> Self {
        let mut factory = PieceFactory::new(seed);
        let mut queue = PieceQueue::new();
        while !queue.is_full() {
            queue.enqueue(factory.next_piece());
        }
        Self {
            queue,
            stack: ReserveStack::new(),
            factory,
        }
    }

    /// Assemble an inventory from explicit parts.
    ///
    /// Lets tests and scripted drivers start from arbitrary container states
    /// instead of a full queue.
    pub fn from_parts(queue: PieceQueue, stack: ReserveStack, factory: PieceFactory) -> Self {
        Self {
            queue,
            stack,
            factory,
        }
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn stack(&self) -> &ReserveStack {
        &self.stack
    }

    /// Dispatch a menu action to the matching operation.
    pub fn apply(&mut self, action: MenuAction) -> ActionOutcome {
        match action {
            MenuAction::Play => self.play(),
            MenuAction::Reserve => self.reserve(),
            MenuAction::Restore => self.restore(),
            MenuAction::SwapFrontTop => self.swap_front_top(),
            MenuAction::SwapThree => self.swap_three(),
        }
    }

    /// Play the front piece and refill the queue with a fresh one.
    pub fn play(&mut self) -> ActionOutcome {
        match self.queue.dequeue() {
            Some(piece) => {
                self.queue.enqueue(self.factory.next_piece());
                ActionOutcome::Played(piece)
            }
            None => ActionOutcome::Rejected(Rejection::Empty(StructureKind::Queue)),
        }
    }

    /// Move the front piece onto the reserve and refill the queue.
    ///
    /// A full reserve rejects before the queue is inspected, matching the
    /// menu's message priority.
    pub fn reserve(&mut self) -> ActionOutcome {
        if self.stack.is_full() {
            return ActionOutcome::Rejected(Rejection::Full(StructureKind::Stack));
        }
        match self.queue.dequeue() {
            Some(piece) => {
                self.stack.push(piece);
                self.queue.enqueue(self.factory.next_piece());
                ActionOutcome::Reserved(piece)
            }
            None => ActionOutcome::Rejected(Rejection::Empty(StructureKind::Queue)),
        }
    }

    /// Return the reserve top to the rear of the queue.
    ///
    /// Recycles an existing piece; nothing new is generated.
    pub fn restore(&mut self) -> ActionOutcome {
        if self.stack.is_empty() {
            return ActionOutcome::Rejected(Rejection::Empty(StructureKind::Stack));
        }
        if self.queue.is_full() {
            return ActionOutcome::Rejected(Rejection::Full(StructureKind::Queue));
        }
        match self.stack.pop() {
            Some(piece) => {
                self.queue.enqueue(piece);
                ActionOutcome::Restored(piece)
            }
            None => ActionOutcome::Rejected(Rejection::Empty(StructureKind::Stack)),
        }
    }

    /// Exchange the queue's front piece with the reserve's top piece in place.
    ///
    /// Both pieces keep their identity; only their container changes.
    pub fn swap_front_top(&mut self) -> ActionOutcome {
        if self.queue.is_empty() {
            return ActionOutcome::Rejected(Rejection::Empty(StructureKind::Queue));
        }
        if self.stack.is_empty() {
            return ActionOutcome::Rejected(Rejection::Empty(StructureKind::Stack));
        }
        match (self.queue.get_mut(0), self.stack.top_mut()) {
            (Some(front), Some(top)) => {
                std::mem::swap(front, top);
                ActionOutcome::SwappedFrontTop {
                    queue_front: *front,
                    stack_top: *top,
                }
            }
            _ => ActionOutcome::Rejected(Rejection::Empty(StructureKind::Queue)),
        }
    }

    /// Exchange the three frontmost queue pieces with the reserve contents,
    /// index for index (reserve indexed bottom-to-top).
    ///
    /// Requires at least three upcoming pieces and an exactly-full reserve.
    pub fn swap_three(&mut self) -> ActionOutcome {
        if self.queue.len() < SWAP_COUNT || !self.stack.is_full() {
            return ActionOutcome::Rejected(Rejection::NotEnoughPieces);
        }
        for i in 0..SWAP_COUNT {
            if let (Some(upcoming), Some(reserved)) = (self.queue.get_mut(i), self.stack.get_mut(i))
            {
                std::mem::swap(upcoming, reserved);
            }
        }
        ActionOutcome::SwappedThree
    }

    /// Read-only snapshot for rendering: upcoming front-to-rear, reserved
    /// bottom-to-top.
    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            upcoming: self.queue.iter().collect(),
            reserved: self.stack.iter().collect(),
        }
    }
}
