//! Mark balance invariant: X and O place marks in strict alternation.

use super::Invariant;
use crate::{GameEngine, GameStatus, Player};

/// Invariant: mark counts agree with whose turn it is.
///
/// While a round is in progress X has placed as many marks as O when X is
/// to move, and one more when O is to move. Once the round ends the current
/// player is the one who made the final move, and a winner is always that
/// player.
pub struct BalancedMarksInvariant;

fn moved_last(player: Player, x_count: usize, o_count: usize) -> bool {
    match player {
        Player::X => x_count == o_count + 1,
        Player::O => x_count == o_count,
    }
}

impl Invariant<GameEngine> for BalancedMarksInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let x_count = engine.board().count(Player::X);
        let o_count = engine.board().count(Player::O);
        let current = engine.current_player();

        match engine.status() {
            GameStatus::InProgress => moved_last(current.opponent(), x_count, o_count),
            GameStatus::Won(winner) => winner == current && moved_last(current, x_count, o_count),
            GameStatus::Draw => moved_last(current, x_count, o_count),
        }
    }

    fn description() -> &'static str {
        "Mark counts match strict X, O alternation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_empty_engine_holds() {
        assert!(BalancedMarksInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_holds_through_a_won_round() {
        let mut engine = GameEngine::new();
        for index in [0, 3, 1, 4, 2] {
            engine.apply_move(index).unwrap();
            assert!(BalancedMarksInvariant::holds(&engine));
        }
        assert_eq!(engine.status(), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut engine = GameEngine::new();
        engine.apply_move(4).unwrap();
        engine.board.set(0, Square::Occupied(Player::X));
        assert!(!BalancedMarksInvariant::holds(&engine));
    }
}
