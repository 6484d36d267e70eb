use super::board::Board;
use super::types::{Mark, TerminalStatus, WinningLine};

pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    WinningLine([0, 1, 2]),
    WinningLine([3, 4, 5]),
    WinningLine([6, 7, 8]),
    // Columns
    WinningLine([0, 3, 6]),
    WinningLine([1, 4, 7]),
    WinningLine([2, 5, 8]),
    // Diagonals
    WinningLine([0, 4, 8]),
    WinningLine([2, 4, 6]),
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

/// First line, in `WINNING_LINES` order, whose cells share a non-empty mark.
pub fn check_win_with_line(board: &Board) -> Option<(Mark, WinningLine)> {
    let cells = board.cells();
    for line in WINNING_LINES {
        let [a, b, c] = line.cells();
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            return Some((mark, line));
        }
    }
    None
}

pub fn has_line(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    let cells = board.cells();
    WINNING_LINES
        .iter()
        .any(|line| line.cells().iter().all(|&i| cells[i] == mark))
}

pub fn evaluate_terminal(board: &Board) -> TerminalStatus {
    if let Some((mark, line)) = check_win_with_line(board) {
        return TerminalStatus::Win { mark, line };
    }

    if board.is_full() {
        return TerminalStatus::Draw;
    }

    TerminalStatus::InProgress
}
