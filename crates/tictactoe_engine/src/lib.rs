//! Tic-tac-toe rules engine.
//!
//! The engine owns a 3x3 board, the player to move, and the round status.
//! It exposes index-based operations only; rendering and input mapping
//! belong to whatever front end drives it.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, MoveResult, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4] {
//!     engine.apply_move(index)?;
//! }
//! assert_eq!(engine.apply_move(2)?, MoveResult::Won(Player::X));
//! # Ok::<(), tictactoe_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod invariants;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use engine::GameEngine;
pub use error::{EngineError, EngineErrorKind};
pub use invariants::{
    BalancedMarksInvariant, EngineInvariants, Invariant, InvariantSet, InvariantViolation,
    StatusConsistentInvariant,
};
pub use outcome::{IgnoreReason, MoveResult};
pub use position::Position;
pub use types::{BOARD_SIZE, Board, GameStatus, Player, Square};
