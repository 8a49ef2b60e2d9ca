use std::fmt;

use tracing::{debug, info};

use super::board::{Board, WinningRun, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use super::Player;
use crate::error::MoveError;

/// Lifecycle of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    NotStarted,
    InProgress,
    Won(Player),
    Tied,
}

impl Phase {
    pub fn is_in_progress(self) -> bool {
        self == Phase::InProgress
    }

    /// Check if game is over
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won(_) | Phase::Tied)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Phase::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Message shown once the game has ended.
    pub fn end_message(self) -> Option<String> {
        match self {
            Phase::Won(player) => Some(format!("{player} won!")),
            Phase::Tied => Some("Tie!".to_string()),
            Phase::NotStarted | Phase::InProgress => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::NotStarted => f.write_str("not started"),
            Phase::InProgress => f.write_str("in progress"),
            Phase::Won(player) => write!(f, "{player} won"),
            Phase::Tied => f.write_str("tied"),
        }
    }
}

/// Outcome of an accepted drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    /// Player whose piece was placed
    pub player: Player,
    /// Phase after the move
    pub phase: Phase,
    /// Player to move next; still the mover if the game was won
    pub current_player: Player,
    pub winning_run: Option<WinningRun>,
}

/// Owns the board and the turn state machine. All mutation goes through
/// [`GameEngine::start`], [`GameEngine::reset`] and [`GameEngine::drop_piece`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    phase: Phase,
    move_count: usize,
    winning_run: Option<WinningRun>,
}

impl GameEngine {
    /// Create an engine with an empty `width` x `height` board.
    ///
    /// Dimensions below four make a win impossible along that axis but are
    /// accepted. Sides above [`MAX_DIMENSION`](super::MAX_DIMENSION) are
    /// clamped.
    pub fn new(width: usize, height: usize) -> Self {
        GameEngine {
            board: Board::new(width, height),
            current_player: Player::One,
            phase: Phase::NotStarted,
            move_count: 0,
            winning_run: None,
        }
    }

    /// Begin a game, or a rematch after a finished one. Ignored while a game
    /// is already in progress.
    pub fn start(&mut self) {
        if self.phase.is_in_progress() {
            debug!("start ignored, game already in progress");
            return;
        }
        self.clear();
        self.phase = Phase::InProgress;
        info!(
            width = self.board.width(),
            height = self.board.height(),
            "game started"
        );
    }

    /// Back to `NotStarted` with an empty board, from any phase.
    pub fn reset(&mut self) {
        self.clear();
        self.phase = Phase::NotStarted;
        info!("game reset");
    }

    fn clear(&mut self) {
        self.board.clear();
        self.current_player = Player::One;
        self.move_count = 0;
        self.winning_run = None;
    }

    /// Drop the current player's piece into `column`.
    ///
    /// The column range is checked before the phase, so an out-of-range
    /// column reports `InvalidColumn` whatever the phase. A rejected move
    /// leaves the engine untouched.
    pub fn drop_piece(&mut self, column: isize) -> Result<Placement, MoveError> {
        let result = self.try_drop(column);
        if let Err(err) = &result {
            debug!(column, %err, "move rejected");
        }
        result
    }

    fn try_drop(&mut self, column: isize) -> Result<Placement, MoveError> {
        let width = self.board.width();
        let col = usize::try_from(column)
            .ok()
            .filter(|&col| col < width)
            .ok_or(MoveError::InvalidColumn { column, width })?;

        if !self.phase.is_in_progress() {
            return Err(MoveError::GameNotInProgress { phase: self.phase });
        }

        let player = self.current_player;
        let row = self.board.drop_piece(col, player)?;
        self.move_count += 1;
        debug!(player = player.id(), row, column = col, "piece placed");

        if let Some(run) = self.board.check_for_win(player) {
            self.phase = Phase::Won(player);
            self.winning_run = Some(run);
            info!(winner = player.id(), moves = self.move_count, "game won");
        } else if self.board.is_full() {
            self.phase = Phase::Tied;
            info!(moves = self.move_count, "game tied");
        } else {
            self.current_player = player.other();
        }

        Ok(Placement {
            row,
            column: col,
            player,
            phase: self.phase,
            current_player: self.current_player,
            winning_run: self.winning_run,
        })
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The run that ended the game, if it was won.
    pub fn winning_run(&self) -> Option<&WinningRun> {
        self.winning_run.as_ref()
    }

    /// Accepted drops since the board was last cleared.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if !self.phase.is_in_progress() {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
