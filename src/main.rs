//! Terminal match-3 runner (default binary).
//!
//! Turn loop: move the cursor, select two gems, watch the swap resolve.
//! Pacing between the mark and settle frames lives here, not in the core;
//! the session only exposes discrete steps.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_tropical::core::{GameSession, SelectOutcome, StepResult};
use tui_tropical::input::{handle_key_event, should_quit, Cursor};
use tui_tropical::term::{GameView, TerminalRenderer, Viewport};
use tui_tropical::types::{GameAction, MARK_PAUSE_MS, REVERT_PAUSE_MS, SETTLE_PAUSE_MS};

const MESSAGE_WELCOME: &str = "match 3 or more of the same gem";
const MESSAGE_MATCH_FOUND: &str = "nice! you found a match";
const MESSAGE_INVALID_SWAP: &str = "that swap doesn't make a match, try again";

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);

    let mut session = GameSession::new(seed);
    let mut cursor = Cursor::new();
    let view = GameView::default();
    let mut message = String::from(MESSAGE_WELCOME);

    loop {
        draw(term, &view, &session, cursor, &message)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }

                let Some(action) = handle_key_event(key) else {
                    continue;
                };

                match action {
                    GameAction::Select => {
                        match session.select(cursor.row, cursor.col) {
                            SelectOutcome::MatchFound => {
                                message = MESSAGE_MATCH_FOUND.to_string();
                                run_resolution(term, &view, &mut session, cursor, &message)?;
                            }
                            SelectOutcome::InvalidSwap => {
                                message = MESSAGE_INVALID_SWAP.to_string();
                                // Show the doomed swap briefly, then revert.
                                draw(term, &view, &session, cursor, &message)?;
                                thread::sleep(Duration::from_millis(REVERT_PAUSE_MS));
                                session.step();
                            }
                            SelectOutcome::Pending | SelectOutcome::Rejected => {}
                        }
                        // Messages above already reflect the notifications;
                        // drain them so the queue stays bounded.
                        let _ = session.take_events();
                    }
                    GameAction::Restart => {
                        session.restart();
                        cursor = Cursor::new();
                        message = MESSAGE_WELCOME.to_string();
                    }
                    _ => cursor.apply(action),
                }
            }
            Event::Resize(_, _) => {
                // Next loop iteration redraws at the new size.
            }
            _ => {}
        }
    }
}

/// Drive the session's resolution steps with rendering pauses in between.
fn run_resolution(
    term: &mut TerminalRenderer,
    view: &GameView,
    session: &mut GameSession,
    cursor: Cursor,
    message: &str,
) -> Result<()> {
    loop {
        match session.step() {
            StepResult::Marked { .. } => {
                draw(term, view, session, cursor, message)?;
                thread::sleep(Duration::from_millis(MARK_PAUSE_MS));
            }
            StepResult::Settled => {
                draw(term, view, session, cursor, message)?;
                thread::sleep(Duration::from_millis(SETTLE_PAUSE_MS));
            }
            StepResult::Reverted => {
                draw(term, view, session, cursor, message)?;
            }
            StepResult::Done => return Ok(()),
        }
    }
}

fn draw(
    term: &mut TerminalRenderer,
    view: &GameView,
    session: &GameSession,
    cursor: Cursor,
    message: &str,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let fb = view.render(session, cursor, message, Viewport::new(w, h));
    term.draw(&fb)
}
