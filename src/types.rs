//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions (the board is always square)
pub const BOARD_SIZE: usize = 8;

/// Minimum run length that counts as a match
pub const MIN_MATCH_LENGTH: usize = 3;

/// Pacing delays used by the terminal runner (milliseconds).
/// The core never sleeps; these only space out the rendered resolution steps.
pub const MARK_PAUSE_MS: u64 = 400;
pub const SETTLE_PAUSE_MS: u64 = 250;
pub const REVERT_PAUSE_MS: u64 = 600;

/// Gem kinds on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GemKind {
    Coconut,
    Watermelon,
    Kiwi,
    Strawberry,
    Pineapple,
    Grape,
}

impl GemKind {
    /// The full palette, in draw order
    pub const ALL: [GemKind; 6] = [
        GemKind::Coconut,
        GemKind::Watermelon,
        GemKind::Kiwi,
        GemKind::Strawberry,
        GemKind::Pineapple,
        GemKind::Grape,
    ];

    /// One-letter tag used for the collection log
    pub fn as_char(&self) -> char {
        match self {
            GemKind::Coconut => 'C',
            GemKind::Watermelon => 'W',
            GemKind::Kiwi => 'K',
            GemKind::Strawberry => 'S',
            GemKind::Pineapple => 'P',
            GemKind::Grape => 'G',
        }
    }

}

/// Cell value on the board (None = cleared sentinel left behind by a match,
/// pending gravity and refill)
pub type TokenType = Option<GemKind>;

/// Grid position, `(row, col)` with row 0 at the top
pub type Pos = (usize, usize);

/// Copyable view of one board cell.
///
/// Position is identity: a cell's `row`/`col` never change over a game,
/// only its `kind` does. The board owns the storage; tokens are computed
/// snapshots, never aliased references into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub row: usize,
    pub col: usize,
    pub kind: TokenType,
}

impl Token {
    pub fn pos(&self) -> Pos {
        (self.row, self.col)
    }
}

/// A maximal run of `MIN_MATCH_LENGTH` or more equal kinds along a single
/// row or column. Ephemeral: produced per scan, discarded after use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub kind: GemKind,
    pub cells: Vec<Pos>,
}

impl Match {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Player-facing actions produced by the key map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Select,
    Restart,
}
