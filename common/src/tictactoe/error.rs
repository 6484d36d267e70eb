use super::types::Mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    OutOfRange { index: usize },
    CellOccupied { index: usize },
    GameNotActive,
    EmptyMark,
    WrongTurn { expected: Mark, found: Mark },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidStateReason {
    BothMarksWon,
    EmptyMarkToMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    InvalidMove(InvalidMoveReason),
    InvalidState(InvalidStateReason),
}

impl GameError {
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, GameError::InvalidMove(_))
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, GameError::InvalidState(_))
    }
}

impl std::fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMoveReason::OutOfRange { index } => {
                write!(f, "cell {} is out of range 0..=8", index)
            }
            InvalidMoveReason::CellOccupied { index } => write!(f, "cell {} is already marked", index),
            InvalidMoveReason::GameNotActive => write!(f, "game is already over"),
            InvalidMoveReason::EmptyMark => write!(f, "cannot place an empty mark"),
            InvalidMoveReason::WrongTurn { expected, found } => {
                write!(f, "not {}'s turn, {} is to move", found, expected)
            }
        }
    }
}

impl std::fmt::Display for InvalidStateReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidStateReason::BothMarksWon => write!(f, "both marks hold a completed line"),
            InvalidStateReason::EmptyMarkToMove => write!(f, "mark to move must be X or O"),
        }
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidMove(reason) => write!(f, "Invalid move: {}", reason),
            GameError::InvalidState(reason) => write!(f, "Invalid state: {}", reason),
        }
    }
}

impl std::error::Error for GameError {}

impl From<InvalidMoveReason> for GameError {
    fn from(reason: InvalidMoveReason) -> Self {
        GameError::InvalidMove(reason)
    }
}

impl From<InvalidStateReason> for GameError {
    fn from(reason: InvalidStateReason) -> Self {
        GameError::InvalidState(reason)
    }
}
