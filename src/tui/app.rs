//! Application state and key handling for the terminal UI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rewind_tictactoe::{GameStateMachine, MoveDisposition, Position, SortOrder};
use tracing::{debug, info, instrument, warn};

use super::input::{digit_position, move_cursor};
use crate::presenter::{MoveEntry, move_entries};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor.
    #[default]
    Board,
    /// Arrows move the move list selection.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Redraw and keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameStateMachine,
    board_cursor: Position,
    focus: Focus,
    sort_order: SortOrder,
    /// Row highlighted in the move list, in display order.
    selected_row: usize,
    notice: Option<String>,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new(sort_order: SortOrder) -> Self {
        Self {
            game: GameStateMachine::new(),
            board_cursor: Position::Center,
            focus: Focus::Board,
            sort_order,
            selected_row: 0,
            notice: None,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameStateMachine {
        &self.game
    }

    /// Square under the keyboard cursor.
    pub fn board_cursor(&self) -> Position {
        self.board_cursor
    }

    /// Pane receiving navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Current move list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Highlighted move list row.
    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    /// Feedback from the last ignored action, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Move list rows in display order.
    pub fn entries(&self) -> Vec<MoveEntry> {
        move_entries(&self.game, self.sort_order)
    }

    /// Handles a key press.
    #[instrument(skip(self, key), fields(code = ?key.code, focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppAction::Quit;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return AppAction::Quit;
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.sync_selection();
            }
            KeyCode::Char('s') => self.toggle_sort_order(),
            KeyCode::Char('r') => self.restart(),
            code => {
                if let Some(pos) = digit_position(code) {
                    self.play(pos);
                } else {
                    match self.focus {
                        Focus::Board => self.handle_board_key(code),
                        Focus::History => self.handle_history_key(code),
                    }
                }
            }
        }
        AppAction::Continue
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.board_cursor),
            _ => self.board_cursor = move_cursor(self.board_cursor, code),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let last_row = self.game.len() - 1;
        match code {
            KeyCode::Up => self.selected_row = self.selected_row.saturating_sub(1),
            KeyCode::Down => self.selected_row = (self.selected_row + 1).min(last_row),
            KeyCode::Enter | KeyCode::Char(' ') => self.jump_to_selected(),
            _ => {}
        }
    }

    /// Plays `pos` for the player to move.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) {
        self.board_cursor = pos;
        match self.game.apply_move(pos) {
            MoveDisposition::Applied => {
                debug!(step = self.game.cursor(), "Move applied to UI state");
                self.notice = None;
                self.sync_selection();
            }
            MoveDisposition::Ignored(reason) => {
                debug!(%reason, "Move ignored");
                self.notice = Some(reason.to_string());
            }
        }
    }

    fn jump_to_selected(&mut self) {
        let Some(step) = self.entries().get(self.selected_row).map(|e| *e.step()) else {
            return;
        };
        match self.game.jump_to(step) {
            Ok(()) => {
                info!(step, "Jumped to step");
                self.notice = None;
            }
            Err(e) => {
                warn!(error = %e, "Jump failed");
                self.notice = Some(e.to_string());
            }
        }
    }

    /// Flips the move list order, keeping the highlight on the same step.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) {
        let step = self.step_at_row(self.selected_row);
        self.sort_order = self.sort_order.toggle();
        self.selected_row = self.row_of_step(step);
        info!(sort_order = ?self.sort_order, "Toggled sort order");
    }

    /// Starts a new game, keeping the sort order.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game = GameStateMachine::new();
        self.notice = None;
        self.sync_selection();
    }

    fn sync_selection(&mut self) {
        self.selected_row = self.row_of_step(self.game.cursor());
    }

    fn step_at_row(&self, row: usize) -> usize {
        match self.sort_order {
            SortOrder::Ascending => row,
            SortOrder::Descending => self.game.len() - 1 - row,
        }
    }

    fn row_of_step(&self, step: usize) -> usize {
        // The mapping is its own inverse.
        self.step_at_row(step)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(SortOrder::default())
    }
}
