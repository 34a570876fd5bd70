use anyhow::Result;

use std::io::{stdin, stdout, Write};

use connect4_minimax::*;

mod game;
use game::*;

/// The fixed search depth used for the AI's turns
const SEARCH_DEPTH: u32 = 5;

fn main() -> Result<()> {
    let mut game = Game::new();
    let mut solver = Solver::new();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // choose the AI strength
    let mut full_strength = true;
    loop {
        let mut buffer = String::new();
        print!("Play against the full-strength AI? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => break,
            Some(_letter @ 'n') => {
                full_strength = false;
                break;
            }
            _ => println!("Unknown answer given"),
        }
    }

    // choose who moves first
    loop {
        let mut buffer = String::new();
        print!("Would you like to move first? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                game.to_move = Side::Human;
                break;
            }
            Some(_letter @ 'n') => {
                game.to_move = Side::Ai;
                break;
            }
            _ => println!("Unknown answer given"),
        }
    }

    // game loop
    loop {
        game.display().expect("Failed to draw board!");

        match game.state {
            GameState::Playing => {
                let next_move = match game.to_move {
                    // AI player
                    Side::Ai => {
                        println!("AI is thinking...");
                        stdout().flush().expect("Failed to flush to stdout!");

                        let column = if full_strength {
                            solver.choose_move(&game.board, SEARCH_DEPTH)
                        } else {
                            solver.greedy_move(&game.board, Cell::Ai)
                        };

                        match column {
                            Some(column) => {
                                println!("AI plays column {}", column + 1);
                                column + 1
                            }
                            // no moves left, pick the draw up next loop
                            None => {
                                game.state = GameState::Draw;
                                continue;
                            }
                        }
                    }

                    // human player
                    Side::Human => {
                        print!("Move input > ");
                        stdout().flush().expect("Failed to flush to stdout!");
                        let mut input_str = String::new();
                        stdin.read_line(&mut input_str)?;

                        match input_str.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str);
                                continue;
                            }
                            Ok(column) => column,
                        }
                    }
                };

                if let Err(err) = game.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::HumanWin => {
                game.display().expect("Failed to draw board!");
                println!("You win!");
                break;
            }
            GameState::AiWin => {
                game.display().expect("Failed to draw board!");
                println!("The AI wins!");
                break;
            }
            GameState::Draw => {
                game.display().expect("Failed to draw board!");
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
