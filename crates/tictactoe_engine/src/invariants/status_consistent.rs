//! Status consistency invariant: the stored status matches the board.

use super::Invariant;
use crate::GameEngine;
use crate::rules::evaluate;

/// Invariant: the engine's status equals the status derived from its board.
pub struct StatusConsistentInvariant;

impl Invariant<GameEngine> for StatusConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.status() == evaluate(engine.board())
    }

    fn description() -> &'static str {
        "Stored status matches the status derived from the board"
    }
}
