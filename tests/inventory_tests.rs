//! Integration tests for the five inventory operations

use piece_inventory::core::{
    ActionOutcome, Inventory, PieceFactory, PieceQueue, Rejection, ReserveStack, StructureKind,
};
use piece_inventory::types::{MenuAction, Piece, PieceKind, QUEUE_CAPACITY};

fn piece(id: u32, kind: PieceKind) -> Piece {
    Piece::new(kind, id)
}

/// Inventory with queue [(1,I),(2,O),(3,T),(4,S),(5,Z)] and the given
/// reserve contents (bottom to top).
fn inventory_with_reserve(reserved: &[Piece]) -> Inventory {
    let mut queue = PieceQueue::new();
    let kinds = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
    ];
    for (i, kind) in kinds.iter().enumerate() {
        queue.enqueue(piece(i as u32 + 1, *kind));
    }
    let mut stack = ReserveStack::new();
    for p in reserved {
        stack.push(*p);
    }
    Inventory::from_parts(queue, stack, PieceFactory::new(42))
}

#[test]
fn test_play_cycle_keeps_queue_full() {
    let mut inventory = Inventory::new(12345);
    for _ in 0..20 {
        assert!(matches!(inventory.play(), ActionOutcome::Played(_)));
        assert_eq!(inventory.queue().len(), QUEUE_CAPACITY);
    }
}

#[test]
fn test_play_returns_pieces_in_queue_order() {
    let mut inventory = inventory_with_reserve(&[]);
    assert_eq!(
        inventory.play(),
        ActionOutcome::Played(piece(1, PieceKind::I))
    );
    assert_eq!(
        inventory.play(),
        ActionOutcome::Played(piece(2, PieceKind::O))
    );
    assert_eq!(
        inventory.play(),
        ActionOutcome::Played(piece(3, PieceKind::T))
    );
}

#[test]
fn test_reserve_then_restore_round_trip() {
    let mut inventory = inventory_with_reserve(&[]);

    let reserved = match inventory.reserve() {
        ActionOutcome::Reserved(p) => p,
        outcome => panic!("unexpected outcome: {outcome:?}"),
    };
    assert_eq!(reserved, piece(1, PieceKind::I));
    assert_eq!(inventory.stack().peek_top(), Some(reserved));
    assert_eq!(inventory.queue().len(), QUEUE_CAPACITY);

    // Reserve refilled the queue, so restoring into it is rejected...
    assert_eq!(
        inventory.restore(),
        ActionOutcome::Rejected(Rejection::Full(StructureKind::Queue))
    );
    assert_eq!(inventory.stack().len(), 1);

    // ...until the queue has a free slot.
    let mut queue = PieceQueue::new();
    queue.enqueue(piece(10, PieceKind::J));
    let mut inventory = Inventory::from_parts(
        queue,
        {
            let mut stack = ReserveStack::new();
            stack.push(piece(20, PieceKind::L));
            stack
        },
        PieceFactory::new(1),
    );
    assert_eq!(
        inventory.restore(),
        ActionOutcome::Restored(piece(20, PieceKind::L))
    );
    assert_eq!(
        inventory.queue().iter().collect::<Vec<_>>(),
        vec![piece(10, PieceKind::J), piece(20, PieceKind::L)]
    );
    assert!(inventory.stack().is_empty());
}

#[test]
fn test_reserve_rejections_leave_state_unchanged() {
    // Full stack: queue untouched.
    let mut inventory = inventory_with_reserve(&[
        piece(7, PieceKind::S),
        piece(8, PieceKind::Z),
        piece(9, PieceKind::L),
    ]);
    let queue_before: Vec<Piece> = inventory.queue().iter().collect();
    assert_eq!(
        inventory.reserve(),
        ActionOutcome::Rejected(Rejection::Full(StructureKind::Stack))
    );
    assert_eq!(inventory.queue().iter().collect::<Vec<_>>(), queue_before);

    // Empty queue: stack untouched.
    let mut inventory = Inventory::from_parts(
        PieceQueue::new(),
        ReserveStack::new(),
        PieceFactory::new(1),
    );
    assert_eq!(
        inventory.reserve(),
        ActionOutcome::Rejected(Rejection::Empty(StructureKind::Queue))
    );
    assert!(inventory.stack().is_empty());
}

#[test]
fn test_swap_front_top_example() {
    let mut inventory = inventory_with_reserve(&[piece(9, PieceKind::Z)]);

    assert_eq!(
        inventory.swap_front_top(),
        ActionOutcome::SwappedFrontTop {
            queue_front: piece(9, PieceKind::Z),
            stack_top: piece(1, PieceKind::I),
        }
    );
    assert_eq!(
        inventory.queue().peek_front(),
        Some(piece(9, PieceKind::Z))
    );
    assert_eq!(inventory.stack().peek_top(), Some(piece(1, PieceKind::I)));
    assert_eq!(inventory.queue().len(), 5);
    assert_eq!(inventory.stack().len(), 1);
}

#[test]
fn test_swap_front_top_rejects_when_either_side_empty() {
    let mut inventory = inventory_with_reserve(&[]);
    assert_eq!(
        inventory.swap_front_top(),
        ActionOutcome::Rejected(Rejection::Empty(StructureKind::Stack))
    );

    let mut inventory = Inventory::from_parts(
        PieceQueue::new(),
        {
            let mut stack = ReserveStack::new();
            stack.push(piece(1, PieceKind::I));
            stack
        },
        PieceFactory::new(1),
    );
    assert_eq!(
        inventory.swap_front_top(),
        ActionOutcome::Rejected(Rejection::Empty(StructureKind::Queue))
    );
}

#[test]
fn test_swap_three_example_from_menu() {
    // Queue front three (1,I),(2,O),(3,T); reserve (7,S),(8,Z),(9,L) bottom
    // to top. After the swap they trade places index for index.
    let mut inventory = inventory_with_reserve(&[
        piece(7, PieceKind::S),
        piece(8, PieceKind::Z),
        piece(9, PieceKind::L),
    ]);

    assert_eq!(inventory.swap_three(), ActionOutcome::SwappedThree);
    assert_eq!(
        inventory.queue().iter().collect::<Vec<_>>(),
        vec![
            piece(7, PieceKind::S),
            piece(8, PieceKind::Z),
            piece(9, PieceKind::L),
            piece(4, PieceKind::S),
            piece(5, PieceKind::Z),
        ]
    );
    assert_eq!(
        inventory.stack().iter().collect::<Vec<_>>(),
        vec![
            piece(1, PieceKind::I),
            piece(2, PieceKind::O),
            piece(3, PieceKind::T),
        ]
    );
}

#[test]
fn test_swap_three_rejects_partial_reserve() {
    let mut inventory =
        inventory_with_reserve(&[piece(7, PieceKind::S), piece(8, PieceKind::Z)]);
    let queue_before: Vec<Piece> = inventory.queue().iter().collect();
    let stack_before: Vec<Piece> = inventory.stack().iter().collect();

    assert_eq!(
        inventory.swap_three(),
        ActionOutcome::Rejected(Rejection::NotEnoughPieces)
    );
    assert_eq!(inventory.queue().iter().collect::<Vec<_>>(), queue_before);
    assert_eq!(inventory.stack().iter().collect::<Vec<_>>(), stack_before);
}

#[test]
fn test_swap_three_rejects_short_queue() {
    let mut queue = PieceQueue::new();
    queue.enqueue(piece(1, PieceKind::I));
    queue.enqueue(piece(2, PieceKind::O));
    let mut stack = ReserveStack::new();
    stack.push(piece(7, PieceKind::S));
    stack.push(piece(8, PieceKind::Z));
    stack.push(piece(9, PieceKind::L));
    let mut inventory = Inventory::from_parts(queue, stack, PieceFactory::new(1));

    assert_eq!(
        inventory.swap_three(),
        ActionOutcome::Rejected(Rejection::NotEnoughPieces)
    );
}

#[test]
fn test_generated_ids_increase_across_operations() {
    let mut inventory = Inventory::new(999);
    let mut seen = Vec::new();

    for round in 0..12 {
        let outcome = match round % 3 {
            0 => inventory.apply(MenuAction::Play),
            1 => inventory.apply(MenuAction::Reserve),
            _ => inventory.apply(MenuAction::SwapFrontTop),
        };
        // Collect ids of everything currently held plus whatever was played.
        if let ActionOutcome::Played(p) = outcome {
            seen.push(p.id);
        }
    }
    for pair in seen.windows(2) {
        assert!(pair[0] < pair[1], "played ids must increase: {seen:?}");
    }

    // Every id across both containers is unique.
    let mut all: Vec<u32> = inventory
        .queue()
        .iter()
        .map(|p| p.id)
        .chain(inventory.stack().iter().map(|p| p.id))
        .collect();
    all.sort_unstable();
    let len_before = all.len();
    all.dedup();
    assert_eq!(all.len(), len_before);
}

#[test]
fn test_outcomes_are_total_never_panic() {
    // Hammer every action over an inventory that starts empty on both sides;
    // nothing may panic and sizes must stay within bounds.
    let mut inventory = Inventory::from_parts(
        PieceQueue::new(),
        ReserveStack::new(),
        PieceFactory::new(7),
    );
    for round in 0..100u32 {
        let action = MenuAction::ALL[(round as usize) % MenuAction::ALL.len()];
        let _ = inventory.apply(action);
        assert!(inventory.queue().len() <= 5);
        assert!(inventory.stack().len() <= 3);
    }
}
