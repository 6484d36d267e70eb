use super::board::Board;
use super::error::{GameError, InvalidStateReason};
use super::game_state::TicTacToeGameState;
use super::types::{Mark, SearchResult};
use super::win_detector::has_line;

/// The search scores positions from this mark's point of view.
pub const MAXIMIZER: Mark = Mark::O;
pub const MINIMIZER: Mark = Mark::X;

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy)]
pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            current_mark: state.current_mark(),
        }
    }
}

/// Cell the side to move should play, or `None` when the board is full.
pub fn calculate_move(input: &BotInput) -> Result<Option<usize>, GameError> {
    best_move(&input.board, input.current_mark).map(|result| result.index)
}

/// Full-depth minimax over every continuation of `board`.
///
/// Scores are absolute: `WIN_SCORE` when `MAXIMIZER` completes a line,
/// `LOSS_SCORE` when `MINIMIZER` does, regardless of who is to move.
/// Ties go to the lowest cell index.
pub fn best_move(board: &Board, mark_to_move: Mark) -> Result<SearchResult, GameError> {
    if mark_to_move == Mark::Empty {
        return Err(InvalidStateReason::EmptyMarkToMove.into());
    }

    if has_line(board, MAXIMIZER) && has_line(board, MINIMIZER) {
        return Err(InvalidStateReason::BothMarksWon.into());
    }

    let mut working = *board;
    Ok(minimax(&mut working, mark_to_move))
}

fn terminal_score(board: &Board) -> Option<i32> {
    if has_line(board, MAXIMIZER) {
        return Some(WIN_SCORE);
    }
    if has_line(board, MINIMIZER) {
        return Some(LOSS_SCORE);
    }
    if board.is_full() {
        return Some(DRAW_SCORE);
    }
    None
}

fn minimax(board: &mut Board, mark_to_move: Mark) -> SearchResult {
    if let Some(score) = terminal_score(board) {
        return SearchResult::terminal(score);
    }

    let Some(opponent) = mark_to_move.opponent() else {
        unreachable!("mark to move is validated before the search starts");
    };
    let maximizing = mark_to_move == MAXIMIZER;

    let mut best: Option<SearchResult> = None;

    for index in board.available_moves() {
        board.set(index, mark_to_move);
        let score = minimax(board, opponent).score;
        board.set(index, Mark::Empty);

        let improves = match best {
            None => true,
            Some(current) if maximizing => score > current.score,
            Some(current) => score < current.score,
        };

        if improves {
            best = Some(SearchResult::new(index, score));
        }
    }

    // The terminal check guarantees at least one empty cell here.
    best.unwrap_or(SearchResult::terminal(DRAW_SCORE))
}
