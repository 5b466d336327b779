//! Match finding - detects runs of 3+ equal gems along rows and columns
//!
//! Scanning is a single linear pass per line: consecutive tokens of equal
//! type are grouped, and each maximal run of at least `MIN_MATCH_LENGTH`
//! becomes one match. Runs are never split and a token lands in at most one
//! match per line.

use crate::types::{Match, Token, MIN_MATCH_LENGTH};

use super::board::Board;

/// Find all matches in one row or column, left-to-right / top-to-bottom.
///
/// O(len): walks the line once. Cleared-sentinel runs are never emitted;
/// only real gems can match.
pub fn find_matches_in_line(line: &[Token]) -> Vec<Match> {
    let mut matches = Vec::new();
    let mut run_start = 0;

    for i in 1..=line.len() {
        let run_ended = i == line.len() || line[i].kind != line[run_start].kind;
        if !run_ended {
            continue;
        }

        if i - run_start >= MIN_MATCH_LENGTH {
            if let Some(kind) = line[run_start].kind {
                matches.push(Match {
                    kind,
                    cells: line[run_start..i].iter().map(Token::pos).collect(),
                });
            }
        }
        run_start = i;
    }

    matches
}

/// Find all matches on the board: every row, then every column.
///
/// A token sitting in both a horizontal and a vertical run appears in two
/// separate matches; runs are not merged across orientations. Callers that
/// count per-token (clearing, scoring) deduplicate naturally because marking
/// a cell makes its second visit a no-op.
pub fn find_all_matches(board: &Board) -> Vec<Match> {
    let mut matches = Vec::new();
    for line in board.lines() {
        matches.extend(find_matches_in_line(&line));
    }
    matches
}
