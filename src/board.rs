//! The game board and win/terminal detection

use anyhow::{anyhow, Result};

use crate::{COLUMN_COUNT, ROW_COUNT, WINDOW_LENGTH};

/// The contents of a single board cell
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    /// A tile belonging to the human player
    Player,
    /// A tile belonging to the AI
    Ai,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    /// Returns the opposing piece, `Empty` has no opponent and maps to itself
    pub fn opponent(self) -> Self {
        match self {
            Cell::Player => Cell::Ai,
            Cell::Ai => Cell::Player,
            Cell::Empty => Cell::Empty,
        }
    }
}

/// A 6x7 Connect 4 position
///
/// Cells are stored left-to-right, bottom-to-top, so row 0 is the bottom
/// row and pieces stack upwards. The board is `Copy`; the search engine
/// explores branches on stack copies and never touches the caller's board.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [Cell; COLUMN_COUNT * ROW_COUNT],
    heights: [usize; COLUMN_COUNT],
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; COLUMN_COUNT * ROW_COUNT],
            heights: [0; COLUMN_COUNT],
        }
    }

    /// Builds a position from a string of 1-indexed column digits,
    /// alternating pieces starting with `first`
    pub fn from_moves<S: AsRef<str>>(moves: S, first: Cell) -> Result<Self> {
        let mut board = Self::new();
        let mut piece = first;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=COLUMN_COUNT) => {
                    let column = column - 1;
                    let row = board
                        .next_open_row(column)
                        .ok_or_else(|| anyhow!("Invalid move, column {} full", column + 1))?;
                    board.drop_piece(row, column, piece);
                    piece = piece.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// The cell at `row`, `column` (row 0 is the bottom)
    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[column + COLUMN_COUNT * row]
    }

    /// Whether a piece can still be dropped into `column`
    pub fn is_valid_location(&self, column: usize) -> bool {
        self.heights[column] < ROW_COUNT
    }

    /// The row a piece dropped into `column` would land on, or `None` if
    /// the column is full
    pub fn next_open_row(&self, column: usize) -> Option<usize> {
        if self.is_valid_location(column) {
            Some(self.heights[column])
        } else {
            None
        }
    }

    /// Places `piece` at `row`, `column` without validation
    ///
    /// The caller guarantees legality: `row` must be the landing row
    /// reported by [`next_open_row`](Self::next_open_row).
    pub fn drop_piece(&mut self, row: usize, column: usize, piece: Cell) {
        self.cells[column + COLUMN_COUNT * row] = piece;
        self.heights[column] = row + 1;
    }

    /// All playable columns in ascending order
    ///
    /// The order seeds both the search iteration order and the random
    /// fallback tie-break, so it must stay ascending.
    pub fn valid_locations(&self) -> Vec<usize> {
        (0..COLUMN_COUNT)
            .filter(|&column| self.is_valid_location(column))
            .collect()
    }

    /// Whether `piece` has four in a row anywhere on the board
    ///
    /// Scans every window start for each of the four directions and
    /// returns on the first alignment found.
    pub fn winning_move(&self, piece: Cell) -> bool {
        // horizontal
        for row in 0..ROW_COUNT {
            for column in 0..=COLUMN_COUNT - WINDOW_LENGTH {
                if (0..WINDOW_LENGTH).all(|i| self.get(row, column + i) == piece) {
                    return true;
                }
            }
        }

        // vertical
        for column in 0..COLUMN_COUNT {
            for row in 0..=ROW_COUNT - WINDOW_LENGTH {
                if (0..WINDOW_LENGTH).all(|i| self.get(row + i, column) == piece) {
                    return true;
                }
            }
        }

        // diagonal /
        for row in 0..=ROW_COUNT - WINDOW_LENGTH {
            for column in 0..=COLUMN_COUNT - WINDOW_LENGTH {
                if (0..WINDOW_LENGTH).all(|i| self.get(row + i, column + i) == piece) {
                    return true;
                }
            }
        }

        // diagonal \
        for row in 0..=ROW_COUNT - WINDOW_LENGTH {
            for column in 0..=COLUMN_COUNT - WINDOW_LENGTH {
                if (0..WINDOW_LENGTH)
                    .all(|i| self.get(row + WINDOW_LENGTH - 1 - i, column + i) == piece)
                {
                    return true;
                }
            }
        }

        false
    }

    /// Whether the game is over: either side has won, or the board is full
    pub fn is_terminal(&self) -> bool {
        self.winning_move(Cell::Player)
            || self.winning_move(Cell::Ai)
            || (0..COLUMN_COUNT).all(|column| !self.is_valid_location(column))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
