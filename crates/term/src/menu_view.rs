//! Menu view: maps an `InventorySnapshot` into styled terminal lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ActionOutcome, InventorySnapshot, Rejection, StructureKind};
use crate::style::{Line, Rgb, Span, TextStyle};
use crate::types::{MenuAction, Piece, PieceKind};

const LABEL: TextStyle = TextStyle::colored(Rgb::new(220, 220, 220)).bold();
const HINT: TextStyle = TextStyle::colored(Rgb::new(140, 140, 140)).dim();
const OK: TextStyle = TextStyle::colored(Rgb::new(100, 220, 120));
const FAIL: TextStyle = TextStyle::colored(Rgb::new(220, 80, 80));

/// Render the full menu screen: both containers, the numbered menu, and the
/// outcome of the previous action.
pub fn render_menu(snap: &InventorySnapshot, outcome: Option<&ActionOutcome>) -> Vec<Line> {
    let mut lines = vec![
        Line::new().with(Span::new("PIECE INVENTORY", LABEL)),
        Line::new(),
    ];

    lines.push(
        Line::new()
            .with(Span::new("UPCOMING ", LABEL))
            .with(Span::new("(front to rear)", HINT)),
    );
    lines.push(pieces_line(&snap.upcoming));
    lines.push(Line::new());

    lines.push(
        Line::new()
            .with(Span::new("RESERVE  ", LABEL))
            .with(Span::new("(bottom to top)", HINT)),
    );
    lines.push(pieces_line(&snap.reserved));
    lines.push(Line::new());

    for action in MenuAction::ALL {
        lines.push(
            Line::new()
                .with(Span::new(format!("[{}] ", action.digit()), LABEL))
                .with(Span::plain(action.describe())),
        );
    }
    lines.push(
        Line::new()
            .with(Span::new("[0] ", LABEL))
            .with(Span::plain("quit")),
    );
    lines.push(Line::new());

    if let Some(outcome) = outcome {
        lines.push(outcome_line(outcome));
    }

    lines
}

/// One row of pieces, or a dim `(empty)` marker.
fn pieces_line(pieces: &[Piece]) -> Line {
    if pieces.is_empty() {
        return Line::new().with(Span::new("  (empty)", HINT));
    }
    let mut line = Line::new().with(Span::plain("  "));
    for piece in pieces {
        line.push(Span::new(
            piece.to_string(),
            TextStyle::colored(piece_color(piece.kind)),
        ));
        line.push(Span::plain(" "));
    }
    line
}

/// Human-readable outcome of the previous action, colored by success.
pub fn outcome_line(outcome: &ActionOutcome) -> Line {
    match outcome {
        ActionOutcome::Played(piece) => {
            Line::new().with(Span::new(format!("Played piece {piece}."), OK))
        }
        ActionOutcome::Reserved(piece) => {
            Line::new().with(Span::new(format!("Sent {piece} to the reserve."), OK))
        }
        ActionOutcome::Restored(piece) => {
            Line::new().with(Span::new(format!("Returned {piece} to the queue."), OK))
        }
        ActionOutcome::SwappedFrontTop {
            queue_front,
            stack_top,
        } => Line::new().with(Span::new(
            format!("Swapped: queue front is now {queue_front}, reserve top is {stack_top}."),
            OK,
        )),
        ActionOutcome::SwappedThree => Line::new().with(Span::new(
            "Swapped the first three pieces with the reserve.",
            OK,
        )),
        ActionOutcome::Rejected(rejection) => {
            Line::new().with(Span::new(rejection_text(*rejection), FAIL))
        }
    }
}

fn rejection_text(rejection: Rejection) -> &'static str {
    match rejection {
        Rejection::Empty(StructureKind::Queue) => "The queue is empty.",
        Rejection::Empty(StructureKind::Stack) => "The reserve is empty.",
        Rejection::Full(StructureKind::Queue) => "The queue is already full.",
        Rejection::Full(StructureKind::Stack) => "The reserve is full.",
        Rejection::NotEnoughPieces => {
            "Need at least three upcoming pieces and a full reserve."
        }
    }
}

/// Piece color per kind (standard tetromino palette).
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}
