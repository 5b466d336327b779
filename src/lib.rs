//! Terminal match-3.
//!
//! The `core` module holds the whole game: board, match scanning, the
//! clear/fall/refill resolution engine, and the turn protocol. `term` and
//! `input` are the thin crossterm glue that makes it playable.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
