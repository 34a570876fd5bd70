//! An agent to play the game of Connect 4
//!
//! Unlike a perfect solver this agent searches to a fixed depth and falls
//! back on the static evaluator at the horizon, trading strength for a
//! bounded, predictable amount of work per move.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::evaluate::score_position;
use crate::{Board, Cell};

/// Sentinel score for a position the AI has won, dominating every
/// heuristic score
pub const WIN_SCORE: i64 = 100_000_000_000_000;
/// Sentinel score for a position the player has won
pub const LOSS_SCORE: i64 = -10_000_000_000_000;

/// An agent choosing Connect 4 moves for the AI side
///
/// # Notes
/// The agent runs a flat minimax search with alpha-beta pruning to a
/// caller-supplied depth, copying the board for every explored branch.
/// Leaves are always evaluated from the AI's perspective, modelling an
/// opponent who plays optimally against the AI's own heuristic.
///
/// # Position Scoring
/// A won position for the AI scores [`WIN_SCORE`], a won position for the
/// player [`LOSS_SCORE`] and a full board with no winner exactly 0. A
/// non-terminal leaf scores via [`score_position`], bounded by the sum of
/// the per-window contributions.
pub struct Solver {
    rng: StdRng,

    /// The number of nodes searched by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
}

impl Solver {
    /// Creates a new `Solver` with an OS-seeded tie-break RNG
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            node_count: 0,
        }
    }

    /// Creates a new `Solver` with a fixed RNG seed, for reproducible play
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            node_count: 0,
        }
    }

    /// Chooses the AI's move for the current turn
    ///
    /// Returns `None` only if the board has no legal moves left; the
    /// caller is expected to detect the end of the game before asking
    /// for a move.
    pub fn choose_move(&mut self, board: &Board, depth: u32) -> Option<usize> {
        self.minimax(board, depth, i64::MIN, i64::MAX, true).0
    }

    /// Performs the depth-bounded game tree search
    ///
    /// Returns the best column found (`None` at leaves) and its score.
    /// `maximizing` selects whose hypothetical move this ply explores:
    /// the AI's when true, the player's when false. Alpha and beta are
    /// threaded through the recursion by value, so sibling branches never
    /// share mutable state.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> (Option<usize>, i64) {
        self.node_count += 1;

        let valid_locations = board.valid_locations();
        let is_terminal = board.is_terminal();
        if depth == 0 || is_terminal {
            if is_terminal {
                if board.winning_move(Cell::Ai) {
                    return (None, WIN_SCORE);
                } else if board.winning_move(Cell::Player) {
                    return (None, LOSS_SCORE);
                } else {
                    // game is over, no more valid moves
                    return (None, 0);
                }
            }
            // depth exhausted, always score the leaf for the AI
            return (None, score_position(board, Cell::Ai));
        }

        if maximizing {
            let mut value = i64::MIN;
            // random fallback in case no branch strictly improves
            let mut column = valid_locations[self.rng.random_range(0..valid_locations.len())];
            for &candidate in &valid_locations {
                if let Some(row) = board.next_open_row(candidate) {
                    let mut next = *board;
                    next.drop_piece(row, candidate, Cell::Ai);
                    let (_, score) = self.minimax(&next, depth - 1, alpha, beta, false);
                    // strict improvement only, ties go to the first column
                    if score > value {
                        value = score;
                        column = candidate;
                    }
                    alpha = alpha.max(value);
                    if alpha >= beta {
                        break;
                    }
                }
            }
            (Some(column), value)
        } else {
            let mut value = i64::MAX;
            let mut column = valid_locations[self.rng.random_range(0..valid_locations.len())];
            for &candidate in &valid_locations {
                if let Some(row) = board.next_open_row(candidate) {
                    let mut next = *board;
                    next.drop_piece(row, candidate, Cell::Player);
                    let (_, score) = self.minimax(&next, depth - 1, alpha, beta, true);
                    if score < value {
                        value = score;
                        column = candidate;
                    }
                    beta = beta.min(value);
                    if alpha >= beta {
                        break;
                    }
                }
            }
            (Some(column), value)
        }
    }

    /// Chooses a move by one-ply lookahead on the static evaluator alone
    ///
    /// Much weaker than [`choose_move`](Self::choose_move); used as the
    /// easy difficulty setting.
    pub fn greedy_move(&mut self, board: &Board, piece: Cell) -> Option<usize> {
        let valid_locations = board.valid_locations();
        if valid_locations.is_empty() {
            return None;
        }

        let mut best_score = i64::MIN;
        let mut best_column = valid_locations[self.rng.random_range(0..valid_locations.len())];
        for &candidate in &valid_locations {
            if let Some(row) = board.next_open_row(candidate) {
                let mut next = *board;
                next.drop_piece(row, candidate, piece);
                let score = score_position(&next, piece);
                if score > best_score {
                    best_score = score;
                    best_column = candidate;
                }
            }
        }
        Some(best_column)
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
