use anyhow::{anyhow, Result};
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::{Board, Cell, COLUMN_COUNT, ROW_COUNT};

/// The side whose turn it is
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Side {
    Human,
    Ai,
}

impl Side {
    pub fn piece(self) -> Cell {
        match self {
            Side::Human => Cell::Player,
            Side::Ai => Cell::Ai,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Side::Human => Side::Ai,
            Side::Ai => Side::Human,
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub enum GameState {
    Playing,
    HumanWin,
    AiWin,
    Draw,
}

/// The live game: the board being played on, the side to move and the
/// current outcome
pub struct Game {
    pub board: Board,
    pub to_move: Side,
    pub state: GameState,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Side::Human,
            state: GameState::Playing,
        }
    }

    /// Applies a 1-indexed column for the side to move, with validation
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState> {
        if column_one_indexed < 1 || column_one_indexed > COLUMN_COUNT {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                COLUMN_COUNT
            ));
        }
        let column = column_one_indexed - 1;
        let row = match self.board.next_open_row(column) {
            Some(row) => row,
            None => {
                return Err(anyhow!("Invalid move, column {} full", column_one_indexed));
            }
        };

        let piece = self.to_move.piece();
        self.board.drop_piece(row, column, piece);

        // react to a win straight after the drop rather than waiting for
        // full-board detection
        self.state = if self.board.winning_move(piece) {
            match self.to_move {
                Side::Human => GameState::HumanWin,
                Side::Ai => GameState::AiWin,
            }
        } else if self.board.valid_locations().is_empty() {
            GameState::Draw
        } else {
            GameState::Playing
        };
        self.to_move = self.to_move.other();

        Ok(self.state)
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=COLUMN_COUNT).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;
        for _ in 0..ROW_COUNT {
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;

        let (origin_x, origin_y) = crossterm::cursor::position()?;

        for row in 0..ROW_COUNT {
            for column in 0..COLUMN_COUNT {
                let (pos_x, pos_y) = (origin_x + column as u16, origin_y - row as u16);

                stdout
                    .queue(MoveTo(pos_x, pos_y))?
                    .queue(PrintStyledContent(
                        style("O")
                            .attribute(Attribute::Bold)
                            .on(Color::DarkBlue)
                            .with(match self.board.get(row, column) {
                                Cell::Player => Color::Red,
                                Cell::Ai => Color::Yellow,
                                Cell::Empty => Color::DarkBlue,
                            }),
                    ))?;
            }
        }
        stdout
            .queue(MoveTo(origin_x + COLUMN_COUNT as u16, origin_y))?
            .queue(PrintStyledContent(style("\n")))?;
        stdout.flush()?;
        Ok(())
    }
}
