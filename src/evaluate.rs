//! The sliding-window static evaluator
//!
//! A position is scored by sampling every 4-cell window along the four
//! alignment directions, plus a bonus for tiles in the centre column.
//! Scores are always taken from a single side's perspective; the search
//! engine evaluates every leaf for the AI regardless of whose turn it is.

use crate::{Board, Cell, CENTER_COLUMN, COLUMN_COUNT, ROW_COUNT, WINDOW_LENGTH};

/// Bonus per own tile in the centre column
const CENTER_WEIGHT: i64 = 3;

/// Scores a single 4-cell window from the perspective of `piece`
///
/// A completed alignment inside a window scores +100, three tiles with an
/// open cell +5 and two tiles with two open cells +2. Three opposing tiles
/// with an open cell score -4 on top of whatever the window earned,
/// rewarding blocking moves.
pub fn eval_window(window: &[Cell; WINDOW_LENGTH], piece: Cell) -> i64 {
    let opp_piece = piece.opponent();

    let own = window.iter().filter(|&&cell| cell == piece).count();
    let opp = window.iter().filter(|&&cell| cell == opp_piece).count();
    let empty = window.iter().filter(|&&cell| cell.is_empty()).count();

    let mut score = 0;
    if own == 4 {
        score += 100;
    } else if own == 3 && empty == 1 {
        score += 5;
    } else if own == 2 && empty == 2 {
        score += 2;
    }

    if opp == 3 && empty == 1 {
        score -= 4;
    }

    score
}

/// Scores a whole position from the perspective of `piece`
///
/// The total is the centre-column bonus plus the sum of every horizontal,
/// vertical and diagonal window score. Centre tiles take part in more
/// alignments, so the bias steers play towards classically stronger moves.
pub fn score_position(board: &Board, piece: Cell) -> i64 {
    let mut score = 0;

    // centre column bonus
    let center_count = (0..ROW_COUNT)
        .filter(|&row| board.get(row, CENTER_COLUMN) == piece)
        .count();
    score += center_count as i64 * CENTER_WEIGHT;

    let mut window = [Cell::Empty; WINDOW_LENGTH];

    // horizontal
    for row in 0..ROW_COUNT {
        for column in 0..=COLUMN_COUNT - WINDOW_LENGTH {
            for i in 0..WINDOW_LENGTH {
                window[i] = board.get(row, column + i);
            }
            score += eval_window(&window, piece);
        }
    }

    // vertical
    for column in 0..COLUMN_COUNT {
        for row in 0..=ROW_COUNT - WINDOW_LENGTH {
            for i in 0..WINDOW_LENGTH {
                window[i] = board.get(row + i, column);
            }
            score += eval_window(&window, piece);
        }
    }

    // diagonal /
    for row in 0..=ROW_COUNT - WINDOW_LENGTH {
        for column in 0..=COLUMN_COUNT - WINDOW_LENGTH {
            for i in 0..WINDOW_LENGTH {
                window[i] = board.get(row + i, column + i);
            }
            score += eval_window(&window, piece);
        }
    }

    // diagonal \
    for row in 0..=ROW_COUNT - WINDOW_LENGTH {
        for column in 0..=COLUMN_COUNT - WINDOW_LENGTH {
            for i in 0..WINDOW_LENGTH {
                window[i] = board.get(row + WINDOW_LENGTH - 1 - i, column + i);
            }
            score += eval_window(&window, piece);
        }
    }

    score
}
