//! Terminal block puzzle runner (default binary).
//!
//! The engine only ever sees two intents: place-at-anchor and restart.
//! Everything else here is presentation state: the cursor, the frame tick
//! that drives the clear flash, and the crossterm session.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_blocks::core::{GameSnapshot, GameState};
use tui_blocks::input::{handle_key_event, should_quit};
use tui_blocks::term::{GameView, TerminalRenderer, Viewport};
use tui_blocks::types::{GameIntent, UiAction, GRID_HEIGHT, GRID_WIDTH, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(wall_clock_seed());
    let mut cursor: (i8, i8) = (GRID_WIDTH as i8 / 2, GRID_HEIGHT as i8 / 2);

    let view = GameView::default();
    let mut snap = GameSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        let cursor_valid = game.can_place_at(cursor.0, cursor.1);
        let fb = view.render(&snap, cursor, cursor_valid, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }

                    if let Some(action) = handle_key_event(key) {
                        match action {
                            UiAction::CursorLeft => cursor.0 = (cursor.0 - 1).max(0),
                            UiAction::CursorRight => {
                                cursor.0 = (cursor.0 + 1).min(GRID_WIDTH as i8 - 1)
                            }
                            UiAction::CursorUp => cursor.1 = (cursor.1 - 1).max(0),
                            UiAction::CursorDown => {
                                cursor.1 = (cursor.1 + 1).min(GRID_HEIGHT as i8 - 1)
                            }
                            UiAction::Place => {
                                game.apply_intent(GameIntent::Place {
                                    x: cursor.0,
                                    y: cursor.1,
                                });
                            }
                            UiAction::Restart => {
                                game.apply_intent(GameIntent::Restart);
                            }
                        }
                    }
                }
            }
        }

        // Tick: advances the clear-flash countdown only.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick_frame();
        }
    }
}
