use super::board::Board;
use super::error::{GameError, InvalidMoveReason};
use super::types::{CELL_COUNT, GameMode, GameStatus, Mark, TerminalStatus, WinningLine};
use super::win_detector::{check_win_with_line, evaluate_terminal};

/// Side the computer plays in human-vs-computer mode.
pub const COMPUTER_MARK: Mark = Mark::O;

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    mode: GameMode,
    last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            mode,
            last_move: None,
        }
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.last_move = None;
    }

    pub fn reset_with_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    /// Places `mark` on `index` and returns the board's terminal status afterwards.
    ///
    /// Rejected moves leave the state untouched. The turn passes to the
    /// opponent of `mark` unless the move ended the game.
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<TerminalStatus, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(InvalidMoveReason::GameNotActive.into());
        }

        if index >= CELL_COUNT {
            return Err(InvalidMoveReason::OutOfRange { index }.into());
        }

        if mark == Mark::Empty {
            return Err(InvalidMoveReason::EmptyMark.into());
        }

        if mark != self.current_mark {
            return Err(InvalidMoveReason::WrongTurn {
                expected: self.current_mark,
                found: mark,
            }
            .into());
        }

        if !self.board.is_empty_at(index) {
            return Err(InvalidMoveReason::CellOccupied { index }.into());
        }

        self.board.set(index, mark);
        self.last_move = Some(index);

        let terminal = evaluate_terminal(&self.board);
        self.status = GameStatus::from(terminal);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(terminal)
    }

    fn switch_turn(&mut self) {
        if self.current_mark == Mark::X {
            self.current_mark = Mark::O;
        } else {
            self.current_mark = Mark::X;
        }
    }

    pub fn evaluate_terminal(&self) -> TerminalStatus {
        evaluate_terminal(&self.board)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn is_active(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board).map(|(_, line)| line)
    }

    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::HumanVsComputer
            && self.is_active()
            && self.current_mark == COMPUTER_MARK
    }
}
