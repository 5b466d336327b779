//! Resolution engine - clear, gravity-fall, refill, repeat to a fixed point
//!
//! One resolution cycle: scan for matches, mark every matched cell with the
//! cleared sentinel, let survivors fall down each column, refill the emptied
//! prefix from the gem source, then rescan. The loop ends when a scan finds
//! nothing; refills can cascade into new matches, which simply run another
//! cycle.
//!
//! The engine borrows the board per call and never owns it, and it never
//! sleeps: pacing between the mark and settle phases is the caller's concern
//! (see `GameSession::step`).

use crate::types::{GemKind, BOARD_SIZE};

use super::board::Board;
use super::matcher::find_all_matches;

/// Outcome of a full resolution run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resolution {
    /// Pre-clear kinds of every cleared cell, in match order
    pub collected: Vec<GemKind>,
    /// Number of scan/clear/refill cycles it took to reach the fixed point
    pub cascades: u32,
}

/// Scan the board and mark every matched cell cleared.
///
/// Returns the kinds the cells held before clearing - this is the only point
/// where the original types are still observable, so score and collection
/// bookkeeping happen on the return value. A cell shared by a horizontal and
/// a vertical match is collected once: the second visit sees the sentinel.
pub fn mark_matches(board: &mut Board) -> Vec<GemKind> {
    let matches = find_all_matches(board);
    let mut collected = Vec::new();

    for m in &matches {
        for &(row, col) in &m.cells {
            if let Some(Some(kind)) = board.get(row, col) {
                collected.push(kind);
                board.set(row, col, None);
            }
        }
    }

    collected
}

/// Lowest cleared cell in the column, excluding row 0.
///
/// Row 0 is never a fall target: nothing sits above it to fall in, so a
/// sentinel there waits for refill instead.
fn lowest_cleared(board: &Board, col: usize) -> Option<usize> {
    (1..BOARD_SIZE).rev().find(|&row| board.is_cleared(row, col))
}

/// Lowest non-cleared cell strictly above `star` in the column
fn lowest_gem_above(board: &Board, col: usize, star: usize) -> Option<usize> {
    (0..star)
        .rev()
        .find(|&row| matches!(board.get(row, col), Some(Some(_))))
}

/// Let gems fall through cleared cells until the column is compact.
///
/// Gems sink one hole at a time: the lowest gem above the lowest hole drops
/// into it, leaving a new hole behind, and the search repeats on the mutated
/// column. Post-condition: cleared cells form a contiguous prefix starting
/// at row 0, with no gap below any gem.
pub fn settle_column(board: &mut Board, col: usize) {
    loop {
        let Some(star) = lowest_cleared(board, col) else {
            return;
        };
        let Some(gem) = lowest_gem_above(board, col, star) else {
            return;
        };

        let kind = board.get(gem, col).flatten();
        board.set(star, col, kind);
        board.set(gem, col, None);
    }
}

/// Refill the cleared prefix at the top of a column.
///
/// Walks from row 0 downward, drawing a fresh gem for each cleared cell and
/// stopping at the first gem. After `settle_column` the sentinel can only
/// occur as a contiguous prefix, so this never needs to look further.
pub fn refill_column(board: &mut Board, col: usize, mut draw: impl FnMut() -> GemKind) {
    for row in 0..BOARD_SIZE {
        if !board.is_cleared(row, col) {
            break;
        }
        board.set(row, col, Some(draw()));
    }
}

/// Settle and refill every column. Columns are independent, so order across
/// columns does not matter.
pub fn settle_and_refill(board: &mut Board, mut draw: impl FnMut() -> GemKind) {
    for col in 0..BOARD_SIZE {
        settle_column(board, col);
        refill_column(board, col, &mut draw);
    }
}

/// Run the full clear/fall/refill loop until no matches remain.
///
/// Always terminates: every cycle clears at least three cells, and a cycle
/// only runs when the scan found something.
pub fn resolve(board: &mut Board, mut draw: impl FnMut() -> GemKind) -> Resolution {
    let mut resolution = Resolution::default();

    loop {
        let gems = mark_matches(board);
        if gems.is_empty() {
            return resolution;
        }
        resolution.collected.extend(gems);
        settle_and_refill(board, &mut draw);
        resolution.cascades += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::GemBag;
    use crate::types::GemKind::{Coconut, Grape, Kiwi, Strawberry, Watermelon};

    /// 2x2 tiling of four kinds: stable under scanning (no run of 2 anywhere).
    fn stable_board() -> Board {
        let pattern = [[Coconut, Grape], [Kiwi, Watermelon]];
        let mut board = Board::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                board.set(row, col, Some(pattern[row % 2][col % 2]));
            }
        }
        board
    }

    fn column(board: &Board, col: usize) -> Vec<Option<GemKind>> {
        (0..BOARD_SIZE).map(|row| board.get(row, col).unwrap()).collect()
    }

    #[test]
    fn test_mark_matches_collects_pre_clear_kinds() {
        let mut board = stable_board();
        for col in 1..4 {
            board.set(5, col, Some(Strawberry));
        }

        let collected = mark_matches(&mut board);
        assert_eq!(collected, vec![Strawberry; 3]);
        for col in 1..4 {
            assert!(board.is_cleared(5, col));
        }
    }

    #[test]
    fn test_mark_matches_counts_cross_center_once() {
        let mut board = stable_board();
        for col in 2..5 {
            board.set(3, col, Some(Strawberry));
        }
        for row in 2..5 {
            board.set(row, 3, Some(Strawberry));
        }

        // 5 distinct cells across two overlapping matches.
        let collected = mark_matches(&mut board);
        assert_eq!(collected.len(), 5);
    }

    #[test]
    fn test_mark_matches_on_stable_board_is_empty() {
        let mut board = stable_board();
        let before = board.clone();
        assert!(mark_matches(&mut board).is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn test_settle_column_compacts_holes() {
        let mut board = stable_board();
        let before = column(&board, 2);

        // Punch holes at rows 3 and 5.
        board.set(3, 2, None);
        board.set(5, 2, None);
        settle_column(&mut board, 2);

        let after = column(&board, 2);

        // Cleared cells form a contiguous prefix at the top.
        assert_eq!(&after[..2], &[None, None]);
        assert!(after[2..].iter().all(|c| c.is_some()));

        // Survivors kept their top-to-bottom order.
        let survivors: Vec<_> = before
            .iter()
            .enumerate()
            .filter(|&(row, _)| row != 3 && row != 5)
            .map(|(_, &kind)| kind)
            .collect();
        assert_eq!(&after[2..], &survivors[..]);
    }

    #[test]
    fn test_settle_column_with_no_holes_is_a_no_op() {
        let mut board = stable_board();
        let before = board.clone();
        settle_column(&mut board, 4);
        assert_eq!(board, before);
    }

    #[test]
    fn test_settle_column_hole_at_top_stays() {
        let mut board = stable_board();
        board.set(0, 6, None);
        settle_column(&mut board, 6);

        // Nothing can fall into row 0; the hole waits for refill.
        assert!(board.is_cleared(0, 6));
        assert!((1..BOARD_SIZE).all(|row| !board.is_cleared(row, 6)));
    }

    #[test]
    fn test_settle_fully_cleared_column() {
        let mut board = stable_board();
        for row in 0..BOARD_SIZE {
            board.set(row, 1, None);
        }
        settle_column(&mut board, 1);
        assert!((0..BOARD_SIZE).all(|row| board.is_cleared(row, 1)));
    }

    #[test]
    fn test_refill_column_fills_only_the_prefix() {
        let mut board = stable_board();
        board.set(0, 3, None);
        board.set(1, 3, None);

        let mut drawn = 0;
        refill_column(&mut board, 3, || {
            drawn += 1;
            Grape
        });

        assert_eq!(drawn, 2);
        assert_eq!(board.get(0, 3), Some(Some(Grape)));
        assert_eq!(board.get(1, 3), Some(Some(Grape)));
        // The rest of the column is untouched.
        assert_eq!(column(&board, 3)[2..], column(&stable_board(), 3)[2..]);
    }

    #[test]
    fn test_refill_stops_at_first_gem() {
        let mut board = stable_board();
        // A hole below a gem must not be refilled (settle owns that case).
        board.set(4, 0, None);

        refill_column(&mut board, 0, || unreachable!("prefix is not cleared"));
        assert!(board.is_cleared(4, 0));
    }

    #[test]
    fn test_refill_fully_cleared_column_reaches_the_bottom() {
        let mut board = stable_board();
        for row in 0..BOARD_SIZE {
            board.set(row, 5, None);
        }

        let mut kinds = [Coconut, Grape, Kiwi, Watermelon].iter().cycle();
        refill_column(&mut board, 5, || *kinds.next().unwrap());
        assert!((0..BOARD_SIZE).all(|row| !board.is_cleared(row, 5)));
    }

    #[test]
    fn test_settle_and_refill_conserves_cell_count() {
        let mut board = stable_board();
        for col in 0..3 {
            board.set(2, col, None);
            board.set(6, col, None);
        }

        let mut bag = GemBag::new(11);
        settle_and_refill(&mut board, || bag.draw());

        // Every cell holds exactly one gem again; none created or destroyed,
        // only types reassigned.
        assert_eq!(board.gem_count(), BOARD_SIZE * BOARD_SIZE);
    }

    #[test]
    fn test_resolve_reaches_no_match_fixed_point() {
        let mut bag = GemBag::new(2024);
        let mut board = Board::filled_with(|| bag.draw());

        resolve(&mut board, || bag.draw());

        assert!(find_all_matches(&board).is_empty());
        assert_eq!(board.gem_count(), BOARD_SIZE * BOARD_SIZE);
    }

    #[test]
    fn test_resolve_on_stable_board_does_nothing() {
        let mut board = stable_board();
        let before = board.clone();

        let resolution = resolve(&mut board, || unreachable!("no refill needed"));
        assert_eq!(board, before);
        assert_eq!(resolution.cascades, 0);
        assert!(resolution.collected.is_empty());
    }

    #[test]
    fn test_resolve_single_run_collects_its_gems() {
        let mut board = stable_board();
        for col in 3..6 {
            board.set(7, col, Some(Strawberry));
        }

        // Scripted draws that cannot extend any run in the stable pattern.
        let mut draws = [Strawberry, Coconut, Grape].iter().cycle();
        let resolution = resolve(&mut board, || *draws.next().unwrap());

        assert_eq!(resolution.cascades, 1);
        assert_eq!(resolution.collected, vec![Strawberry; 3]);
        assert!(find_all_matches(&board).is_empty());
    }
}
