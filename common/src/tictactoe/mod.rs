mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves, is_valid_move};
pub use bot_controller::{
    BotInput, DRAW_SCORE, LOSS_SCORE, MAXIMIZER, MINIMIZER, WIN_SCORE, best_move, calculate_move,
};
pub use error::{GameError, InvalidMoveReason, InvalidStateReason};
pub use game_state::{COMPUTER_MARK, TicTacToeGameState};
pub use types::{
    BOARD_SIZE, CELL_COUNT, GameMode, GameStatus, Mark, SearchResult, TerminalStatus, WinningLine,
};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, evaluate_terminal, has_line};
