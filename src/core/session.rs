//! Game session - score, selection state, and the turn protocol
//!
//! A turn: select two tokens, swap them, scan. A swap that produces a match
//! hands control to the resolution engine; one that does not is reverted and
//! reported. The session drives resolution in discrete steps so a frontend
//! can pace rendering between them - the core never sleeps.
//!
//! Phases: Idle -> (one token selected) -> Resolving -> Idle, with a
//! Reverting sub-path for invalid swaps. `select` only advances the
//! selection; all deferred work happens in `step`.

use arrayvec::ArrayVec;

use crate::types::{GemKind, Pos};

use super::board::Board;
use super::matcher::find_all_matches;
use super::resolve::{mark_matches, resolve, settle_and_refill};
use super::rng::GemBag;

/// Pending work between calls to `step`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    /// A swap produced matches; `marked` tells whether the current cycle's
    /// matches are already cleared and waiting to fall.
    Resolving { marked: bool },
    /// A swap produced nothing; the same two positions swap back next step.
    Reverting { a: Pos, b: Pos },
}

/// Result of a `select` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Out of range, duplicate, or mid-resolution - nothing changed
    Rejected,
    /// First token recorded, waiting for the second
    Pending,
    /// Swap applied and at least one match found; drive `step` to resolve
    MatchFound,
    /// Swap applied but matched nothing; next `step` reverts it
    InvalidSwap,
}

/// One discrete unit of resolution work
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResult {
    /// Matches were cleared and scored; the board shows the sentinels
    Marked { gems: Vec<GemKind> },
    /// Survivors fell and the cleared prefix was refilled
    Settled,
    /// The invalid swap was undone
    Reverted,
    /// Nothing pending; the session is idle
    Done,
}

/// Fire-and-forget notifications for the frontend (drain with `take_events`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    BoardChanged,
    MatchFound,
    InvalidSwap,
    ScoreChanged { score: u32 },
}

/// Holds the board, score, and selection for one game
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    bag: GemBag,
    selection: ArrayVec<Pos, 2>,
    phase: Phase,
    score: u32,
    collected: Vec<GemKind>,
    events: Vec<SessionEvent>,
}

impl GameSession {
    /// Create a session with a freshly dealt board.
    ///
    /// The initial deal can contain matches; those are resolved to a fixed
    /// point before play starts and award no score.
    pub fn new(seed: u32) -> Self {
        let mut bag = GemBag::new(seed);
        let mut board = Board::filled_with(|| bag.draw());
        resolve(&mut board, || bag.draw());

        Self {
            board,
            bag,
            selection: ArrayVec::new(),
            phase: Phase::Idle,
            score: 0,
            collected: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Every gem collected this session, oldest first
    pub fn collected(&self) -> &[GemKind] {
        &self.collected
    }

    /// Positions currently selected (0 or 1 entries outside a swap)
    pub fn selection(&self) -> &[Pos] {
        &self.selection
    }

    /// True while a swap is being resolved or reverted
    pub fn busy(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Take and clear the pending notifications
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Select the token at (row, col).
    ///
    /// The second in-range selection triggers the swap and scan. Coordinates
    /// off the board, re-selecting the same cell, and calls while resolution
    /// is in flight are rejected at the boundary.
    pub fn select(&mut self, row: usize, col: usize) -> SelectOutcome {
        if self.busy() || !self.board.in_bounds(row, col) {
            return SelectOutcome::Rejected;
        }
        let pos = (row, col);
        if self.selection.contains(&pos) {
            return SelectOutcome::Rejected;
        }

        self.selection.push(pos);
        if self.selection.len() < 2 {
            return SelectOutcome::Pending;
        }

        let (a, b) = (self.selection[0], self.selection[1]);
        self.selection.clear();

        self.board.swap(a, b);
        self.events.push(SessionEvent::BoardChanged);

        if find_all_matches(&self.board).is_empty() {
            self.phase = Phase::Reverting { a, b };
            self.events.push(SessionEvent::InvalidSwap);
            SelectOutcome::InvalidSwap
        } else {
            self.phase = Phase::Resolving { marked: false };
            self.events.push(SessionEvent::MatchFound);
            SelectOutcome::MatchFound
        }
    }

    /// Perform one unit of pending work.
    ///
    /// Resolution alternates `Marked` (sentinels visible, score awarded) and
    /// `Settled` (fall + refill) until a scan comes up empty and `Done` is
    /// returned. Callers may stop between any two steps; the board is always
    /// well-formed.
    pub fn step(&mut self) -> StepResult {
        match self.phase {
            Phase::Idle => StepResult::Done,

            Phase::Reverting { a, b } => {
                self.board.swap(a, b);
                self.phase = Phase::Idle;
                self.events.push(SessionEvent::BoardChanged);
                StepResult::Reverted
            }

            Phase::Resolving { marked: false } => {
                let gems = mark_matches(&mut self.board);
                if gems.is_empty() {
                    self.phase = Phase::Idle;
                    return StepResult::Done;
                }

                // Score: +1 per collected token, log keeps the original kind.
                self.score += gems.len() as u32;
                self.collected.extend_from_slice(&gems);
                self.phase = Phase::Resolving { marked: true };
                self.events.push(SessionEvent::BoardChanged);
                self.events.push(SessionEvent::ScoreChanged { score: self.score });
                StepResult::Marked { gems }
            }

            Phase::Resolving { marked: true } => {
                let bag = &mut self.bag;
                settle_and_refill(&mut self.board, || bag.draw());
                self.phase = Phase::Resolving { marked: false };
                self.events.push(SessionEvent::BoardChanged);
                StepResult::Settled
            }
        }
    }

    /// Run all pending work to completion (non-paced callers and tests)
    pub fn step_to_idle(&mut self) {
        while self.step() != StepResult::Done {}
    }

    /// Deal a fresh board and reset score, continuing the gem sequence
    pub fn restart(&mut self) {
        *self = Self::new(self.bag.state());
        self.events.push(SessionEvent::BoardChanged);
    }
}
