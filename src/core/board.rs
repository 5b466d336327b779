//! Board module - manages the gem grid
//!
//! The board is an 8x8 grid where every cell holds a token type: a gem kind,
//! or `None` for the cleared sentinel. Uses a flat array for cache locality
//! and zero allocation.
//! Coordinates: (row, col) where row 0 is the top of the board.

use arrayvec::ArrayVec;

use crate::types::{GemKind, Pos, Token, TokenType, BOARD_SIZE};

/// Total number of cells on the board
const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// One row or column's worth of token snapshots
pub type Line = ArrayVec<Token, BOARD_SIZE>;

/// The game board - 8x8 using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of token types, row-major order (row * SIZE + col)
    cells: [TokenType; CELL_COUNT],
}

impl Board {
    /// Create a board with every cell cleared
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Create a board filled from a gem source
    pub fn filled_with(mut draw: impl FnMut() -> GemKind) -> Self {
        let mut board = Self::new();
        for cell in &mut board.cells {
            *cell = Some(draw());
        }
        board
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some(row * BOARD_SIZE + col)
    }

    /// Side length of the (square) board
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Check if a position is on the board
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    /// Get the token type at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<TokenType> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set the token type at (row, col), in place
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, kind: TokenType) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = kind;
                true
            }
            None => false,
        }
    }

    /// Check if the cell at (row, col) holds the cleared sentinel
    pub fn is_cleared(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Snapshot the token at (row, col)
    /// Returns None if out of bounds
    pub fn token(&self, row: usize, col: usize) -> Option<Token> {
        self.get(row, col).map(|kind| Token { row, col, kind })
    }

    /// Tokens of row `row`, left to right
    pub fn row_tokens(&self, row: usize) -> Line {
        debug_assert!(row < BOARD_SIZE);
        (0..BOARD_SIZE)
            .filter_map(|col| self.token(row, col))
            .collect()
    }

    /// Tokens of column `col`, top to bottom (top = row 0)
    pub fn col_tokens(&self, col: usize) -> Line {
        debug_assert!(col < BOARD_SIZE);
        (0..BOARD_SIZE)
            .filter_map(|row| self.token(row, col))
            .collect()
    }

    /// All rows followed by all columns.
    ///
    /// The order is deterministic and stable across calls; the match scan
    /// depends on that for reproducible match ordering.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        (0..BOARD_SIZE)
            .map(|row| self.row_tokens(row))
            .chain((0..BOARD_SIZE).map(|col| self.col_tokens(col)))
    }

    /// Exchange the token types at two positions, in place.
    ///
    /// Positions keep their identity; only the kinds move. Swapping the same
    /// pair twice restores the board, so `swap` is its own inverse.
    /// Out-of-bounds positions leave the board untouched.
    pub fn swap(&mut self, a: Pos, b: Pos) -> bool {
        let (Some(ia), Some(ib)) = (Self::index(a.0, a.1), Self::index(b.0, b.1)) else {
            return false;
        };
        self.cells.swap(ia, ib);
        true
    }

    /// Count of cells currently holding a gem (not the cleared sentinel)
    pub fn gem_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
