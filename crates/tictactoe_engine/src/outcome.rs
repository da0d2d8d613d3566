//! Results of applying a move.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Why a move left the engine untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The round already ended; only a reset accepts play again.
    #[display("Game is already over")]
    GameOver,
    /// The cell at this index already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),
}

/// What happened when a move was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    /// The move was not applied. Board, player and status are unchanged.
    Ignored(IgnoreReason),
    /// The mark was placed and play passes to `next`.
    Continue {
        /// Player to move next.
        next: Player,
    },
    /// The mover completed a line.
    Won(Player),
    /// The mover filled the last cell without completing a line.
    Draw,
}

impl MoveResult {
    /// Returns true if the move changed the board.
    pub fn is_applied(&self) -> bool {
        !matches!(self, MoveResult::Ignored(_))
    }

    /// Returns true if the move ended the round.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveResult::Won(_) | MoveResult::Draw)
    }
}
