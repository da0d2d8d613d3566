//! The game engine: board, turn and status for one round at a time.

use super::error::{EngineError, EngineErrorKind};
use super::invariants::{EngineInvariants, InvariantSet};
use super::outcome::{IgnoreReason, MoveResult};
use super::rules;
use super::types::{BOARD_SIZE, Board, GameStatus, Player, Square};
use tracing::{debug, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Each engine owns its state outright, so independent games never share
/// anything. All operations run to completion on the caller's thread.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameEngine {
    /// Creates an engine with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next applied move places.
    ///
    /// After a round ends this is the player who made the final move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Moves on a finished round or an occupied cell change nothing and
    /// return [`MoveResult::Ignored`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::IndexOutOfRange`] if `index` is not a cell,
    /// whatever the round status.
    /// In debug builds, returns [`EngineErrorKind::InvariantViolation`] if the
    /// move left the engine in an inconsistent state.
    #[instrument(skip(self), fields(player = %self.current_player, status = ?self.status))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveResult, EngineError> {
        if index >= BOARD_SIZE {
            warn!(index, "Cell index out of range");
            return Err(EngineError::new(EngineErrorKind::IndexOutOfRange(index)));
        }

        if self.status.is_terminal() {
            debug!("Move ignored: round is over");
            return Ok(MoveResult::Ignored(IgnoreReason::GameOver));
        }

        if !self.board.is_empty(index) {
            debug!(index, "Move ignored: cell occupied");
            return Ok(MoveResult::Ignored(IgnoreReason::Occupied(index)));
        }

        let mover = self.current_player;
        self.board.set(index, Square::Occupied(mover));

        let result = match rules::evaluate(&self.board) {
            GameStatus::Won(winner) => {
                self.status = GameStatus::Won(winner);
                debug!(%winner, "Round won");
                MoveResult::Won(winner)
            }
            GameStatus::Draw => {
                self.status = GameStatus::Draw;
                debug!("Round drawn");
                MoveResult::Draw
            }
            GameStatus::InProgress => {
                self.current_player = mover.opponent();
                MoveResult::Continue {
                    next: self.current_player,
                }
            }
        };

        #[cfg(debug_assertions)]
        self.check_invariants()?;

        Ok(result)
    }

    /// Restores the empty board, X to move, round in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting engine");
        self.board.clear();
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
    }

    /// Verifies every engine invariant.
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::InvariantViolation`] listing each failed check.
    pub fn check_invariants(&self) -> Result<(), EngineError> {
        EngineInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            EngineError::new(EngineErrorKind::InvariantViolation(descriptions))
        })
    }
}
