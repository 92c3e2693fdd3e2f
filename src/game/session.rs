use tracing::{debug, info};

use super::board::{self, Board};
use super::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("column is out of range")]
    InvalidColumn,
    #[error("game is over")]
    GameOver,
}

impl From<board::MoveError> for MoveError {
    fn from(err: board::MoveError) -> Self {
        match err {
            board::MoveError::ColumnFull => MoveError::ColumnFull,
            board::MoveError::InvalidColumn => MoveError::InvalidColumn,
        }
    }
}

/// One game from the first disc to a win or draw.
///
/// The session is the only place that flips the turn and records the
/// outcome, and it does so only after the board accepted a disc.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    outcome: Option<GameOutcome>,
}

impl GameSession {
    pub fn new() -> Self {
        info!("new game session");
        GameSession {
            board: Board::new(),
            outcome: None,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_player(&self) -> Player {
        self.board.active_player()
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// True until someone wins or the board fills up
    pub fn is_running(&self) -> bool {
        self.outcome.is_none()
    }

    /// Drop a disc for the active player into board column `column`.
    ///
    /// Returns the outcome if this move ended the game. A rejected move leaves
    /// the board and the turn untouched.
    pub fn play(&mut self, column: usize) -> Result<Option<GameOutcome>, MoveError> {
        if !self.is_running() {
            return Err(MoveError::GameOver);
        }

        let player = self.board.active_player();
        let row = self.board.place_disc(column)?;
        self.board.swap_turn();
        debug!(player = player.name(), column, row, "disc placed");

        self.outcome = if let Some(winner) = self.board.get_winner() {
            Some(GameOutcome::Winner(winner))
        } else if self.board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        match self.outcome {
            Some(GameOutcome::Winner(winner)) => info!(winner = winner.name(), "game won"),
            Some(GameOutcome::Draw) => info!("game drawn"),
            None => {}
        }

        Ok(self.outcome)
    }

    /// Throw the board away and start over
    pub fn restart(&mut self) {
        *self = GameSession::new();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
