//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The engine calls them after
//! every move; front ends may call them to preview positions.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, check_winner};

use crate::types::{Board, GameStatus};

/// Derives the status of a board.
///
/// The win check runs first: a full board that contains a line is won, not drawn.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Player, Square};

    #[test]
    fn test_evaluate_empty_board() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_evaluate_prefers_win_over_full() {
        // X X X / O O X / X O O
        let mut board = Board::new();
        for (index, mark) in "XXXOOXXOO".chars().enumerate() {
            let player = if mark == 'X' { Player::X } else { Player::O };
            board.set(index, Square::Occupied(player));
        }
        assert_eq!(evaluate(&board), GameStatus::Won(Player::X));
    }
}
