use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }

    pub fn to_char(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            '.' | '-' | '_' | ' ' => Some(Mark::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Three cell indices that complete a game when they share a mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine(pub [usize; 3]);

impl WinningLine {
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// Outcome of scanning a board, independent of whose turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalStatus {
    InProgress,
    Win { mark: Mark, line: WinningLine },
    Draw,
}

impl TerminalStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TerminalStatus::InProgress)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl From<TerminalStatus> for GameStatus {
    fn from(status: TerminalStatus) -> Self {
        match status {
            TerminalStatus::InProgress => GameStatus::InProgress,
            TerminalStatus::Win { mark: Mark::X, .. } => GameStatus::XWon,
            TerminalStatus::Win { mark: Mark::O, .. } => GameStatus::OWon,
            TerminalStatus::Win { mark: Mark::Empty, .. } => unreachable!(),
            TerminalStatus::Draw => GameStatus::Draw,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    #[default]
    HumanVsHuman,
    HumanVsComputer,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::HumanVsHuman => write!(f, "human vs human"),
            GameMode::HumanVsComputer => write!(f, "human vs computer"),
        }
    }
}

/// Move chosen by the search. `index` is `None` when the board had no empty cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub index: Option<usize>,
    pub score: i32,
}

impl SearchResult {
    pub fn terminal(score: i32) -> Self {
        Self { index: None, score }
    }

    pub fn new(index: usize, score: i32) -> Self {
        Self {
            index: Some(index),
            score,
        }
    }
}
