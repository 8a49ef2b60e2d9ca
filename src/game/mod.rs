//! Core Connect Four game logic: board representation, player types, and the
//! engine driving the `NotStarted -> InProgress -> Won | Tied` state machine.

mod board;
mod engine;
mod player;

pub use board::{
    Board, Cell, Position, WinningRun, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION, WIN_LENGTH,
};
pub use engine::{GameEngine, Phase, Placement};
pub use player::Player;
