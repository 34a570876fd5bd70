//! A heuristic agent for playing the board game 'Connect 4'
//!
//! This agent uses a depth-bounded minimax search with alpha-beta
//! pruning and a sliding-window static evaluator to pick a strong
//! (not perfect) move for any position.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::Board, solver::Solver};
//!
//! let board = Board::new();
//! let mut solver = Solver::from_seed(0);
//!
//! // on an empty board the centre column is the best opening
//! assert_eq!(solver.choose_move(&board, 1), Some(3));
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod evaluate;

pub mod solver;


pub use board::{Board, Cell};
pub use evaluate::{eval_window, score_position};
pub use solver::{Solver, LOSS_SCORE, WIN_SCORE};

/// The number of rows on the game board, row 0 is the bottom
pub const ROW_COUNT: usize = 6;

/// The number of columns on the game board
pub const COLUMN_COUNT: usize = 7;

/// The length of an alignment, and of every evaluation window
pub const WINDOW_LENGTH: usize = 4;

/// The column favoured by the evaluator's centre bias
pub const CENTER_COLUMN: usize = COLUMN_COUNT / 2;

// an alignment must fit on the board in every direction
const_assert!(WINDOW_LENGTH <= ROW_COUNT);
const_assert!(WINDOW_LENGTH <= COLUMN_COUNT);
