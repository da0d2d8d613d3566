//! Application state and logic.

use crate::input::{cell_shortcut, move_cursor};
use anyhow::Result;
use crossterm::event::KeyCode;
use tictactoe_engine::{GameEngine, GameStatus, IgnoreReason, MoveResult, Position};
use tracing::{debug, instrument};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the program.
    Quit,
}

/// Cell highlighted at the start of each round.
const START_CURSOR: Position = Position::Center;

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    hint: Option<String>,
}

impl App {
    /// Creates a new application with a fresh round.
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: START_CURSOR,
            hint: None,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the transient hint left by the last key press, if any.
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Result message for the round: a winner, a draw, or nothing yet.
    pub fn status_message(&self) -> String {
        match self.engine.status() {
            GameStatus::InProgress => String::new(),
            GameStatus::Won(player) => format!("Player {} won!", player),
            GameStatus::Draw => "Draw!".to_string(),
        }
    }

    /// Turn indicator shown while the round is in progress.
    pub fn turn_message(&self) -> Option<String> {
        (!self.engine.status().is_terminal())
            .then(|| format!("Player {} to move", self.engine.current_player()))
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Result<Control> {
        self.hint = None;

        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(Control::Quit),
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor)?,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            other => {
                if let Some(position) = cell_shortcut(other) {
                    self.cursor = position;
                    self.play(position)?;
                }
            }
        }

        Ok(Control::Continue)
    }

    /// Plays the current player's mark at `position`.
    fn play(&mut self, position: Position) -> Result<()> {
        let result = self.engine.apply_move(position.to_index())?;
        debug!(?position, ?result, "Move handled");

        if let MoveResult::Ignored(reason) = result {
            self.hint = Some(match reason {
                IgnoreReason::Occupied(_) => format!("{} is already taken", position.label()),
                IgnoreReason::GameOver => "Game over. Press r to play again".to_string(),
            });
        }
        Ok(())
    }

    /// Restarts the round.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.reset();
        self.cursor = START_CURSOR;
        self.hint = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{Player, Square};

    fn press_all(app: &mut App, keys: &str) {
        for c in keys.chars() {
            assert_eq!(app.handle_key(KeyCode::Char(c)).unwrap(), Control::Continue);
        }
    }

    #[test]
    fn test_new_app() {
        let app = App::new();
        assert_eq!(app.cursor(), Position::Center);
        assert_eq!(app.status_message(), "");
        assert_eq!(app.turn_message().as_deref(), Some("Player X to move"));
        assert!(app.hint().is_none());
    }

    #[test]
    fn test_enter_plays_cursor_cell() {
        let mut app = App::new();
        app.handle_key(KeyCode::Up).unwrap();
        app.handle_key(KeyCode::Enter).unwrap();

        assert_eq!(
            app.engine().board().get(Position::TopCenter.to_index()),
            Some(Square::Occupied(Player::X))
        );
        assert_eq!(app.turn_message().as_deref(), Some("Player O to move"));
    }

    #[test]
    fn test_digits_win_round() {
        let mut app = App::new();
        press_all(&mut app, "14253");

        assert_eq!(app.status_message(), "Player X won!");
        assert!(app.turn_message().is_none());
        assert_eq!(app.cursor(), Position::TopRight);
    }

    #[test]
    fn test_draw_message() {
        let mut app = App::new();
        press_all(&mut app, "123546879");
        assert_eq!(app.status_message(), "Draw!");
    }

    #[test]
    fn test_occupied_cell_hint() {
        let mut app = App::new();
        press_all(&mut app, "55");

        assert_eq!(app.hint(), Some("Center is already taken"));
        assert_eq!(app.engine().current_player(), Player::O);

        app.handle_key(KeyCode::Left).unwrap();
        assert!(app.hint().is_none());
    }

    #[test]
    fn test_game_over_hint_and_restart() {
        let mut app = App::new();
        press_all(&mut app, "142536");
        assert_eq!(app.hint(), Some("Game over. Press r to play again"));

        app.handle_key(KeyCode::Char('r')).unwrap();
        assert_eq!(app.engine(), &GameEngine::new());
        assert_eq!(app.status_message(), "");
        assert!(app.hint().is_none());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        assert_eq!(app.handle_key(KeyCode::Char('q')).unwrap(), Control::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc).unwrap(), Control::Quit);
    }
}
