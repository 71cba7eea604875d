//! Core Connect Four game logic: board, players, win/draw detection and the
//! turn sequencer that drives one move at a time.

mod board;
mod detect;
mod player;
mod sequencer;

pub use board::{Board, Cell, BOTTOM_ROW, COLS, ROWS, TOP_ROW};
pub use detect::{evaluate_draw, evaluate_win, WIN_LENGTH};
pub use player::Player;
pub use sequencer::{GameOutcome, GameState, Move, Phase, Sequencer, Step};
