//! Interactive piece-inventory menu (default binary).
//!
//! Renders the upcoming queue, the reserve stack, and a numbered menu, then
//! dispatches single-key choices to the inventory operations. Uses crossterm
//! for input and a line-oriented terminal screen for output.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use piece_inventory::core::{ActionOutcome, Inventory};
use piece_inventory::input::{handle_key_event, should_quit};
use piece_inventory::term::{render_menu, TerminalScreen};

fn main() -> Result<()> {
    let mut screen = TerminalScreen::new();
    screen.enter()?;

    let result = run(&mut screen);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut TerminalScreen) -> Result<()> {
    let mut inventory = Inventory::new(seed_from_clock());
    let mut last_outcome: Option<ActionOutcome> = None;

    loop {
        let lines = render_menu(&inventory.snapshot(), last_outcome.as_ref());
        screen.draw(&lines)?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Ok(());
            }
            if let Some(action) = handle_key_event(key) {
                last_outcome = Some(inventory.apply(action));
            }
        }
    }
}

/// Wall-clock seed for interactive runs; tests construct `Inventory` with
/// fixed seeds instead.
fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
