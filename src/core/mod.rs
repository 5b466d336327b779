//! Core module - pure match-3 logic with no terminal dependencies
//!
//! Everything here is synchronous and deterministic given a seed: board
//! storage, match scanning, the resolution engine, and the turn protocol.

pub mod board;
pub mod matcher;
pub mod resolve;
pub mod rng;
pub mod session;

// Re-export commonly used types
pub use board::Board;
pub use matcher::{find_all_matches, find_matches_in_line};
pub use resolve::{
    mark_matches, refill_column, resolve, settle_and_refill, settle_column, Resolution,
};
pub use rng::{GemBag, SimpleRng};
pub use session::{GameSession, SelectOutcome, SessionEvent, StepResult};
