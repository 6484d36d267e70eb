use tictactoe_common::tictactoe::{BOARD_SIZE, GameStatus, Mark, TicTacToeGameState};

/// Text grid for the board. Winning cells are wrapped in brackets and,
/// when `show_cell_numbers` is set, empty cells show their index.
pub fn render_board(state: &TicTacToeGameState, show_cell_numbers: bool) -> String {
    let winning_line = state.winning_line();
    let mut out = String::new();

    for (row_index, row) in state.board().rows().enumerate() {
        if row_index > 0 {
            out.push_str("\n---+---+---\n");
        }
        for (col_index, &mark) in row.iter().enumerate() {
            let index = row_index * BOARD_SIZE + col_index;
            if col_index > 0 {
                out.push('|');
            }
            let symbol = match mark {
                Mark::Empty if show_cell_numbers => char::from_digit(index as u32, 10).unwrap_or(' '),
                Mark::Empty => ' ',
                _ => mark.to_char(),
            };
            if winning_line.is_some_and(|line| line.contains(index)) {
                out.push_str(&format!("[{}]", symbol));
            } else {
                out.push_str(&format!(" {} ", symbol));
            }
        }
    }

    out
}

pub fn status_line(state: &TicTacToeGameState) -> String {
    match state.status() {
        GameStatus::InProgress => format!("{} to move ({})", state.current_mark(), state.mode()),
        GameStatus::XWon => "X Wins!".to_string(),
        GameStatus::OWon => "O Wins!".to_string(),
        GameStatus::Draw => "It's a Draw!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board_with_numbers() {
        let state = TicTacToeGameState::default();
        let rendered = render_board(&state, true);
        assert_eq!(
            rendered,
            " 0 | 1 | 2 \n---+---+---\n 3 | 4 | 5 \n---+---+---\n 6 | 7 | 8 "
        );
    }

    #[test]
    fn test_render_highlights_winning_line() {
        let mut state = TicTacToeGameState::default();
        for (index, mark) in [(0, Mark::X), (3, Mark::O), (1, Mark::X), (4, Mark::O), (2, Mark::X)] {
            state.apply_move(index, mark).unwrap();
        }
        let rendered = render_board(&state, false);
        let first_row = rendered.lines().next().unwrap();
        assert_eq!(first_row, "[X]|[X]|[X]");
        assert!(rendered.contains(" O | O |   "));
        assert_eq!(status_line(&state), "X Wins!");
    }

    #[test]
    fn test_status_line_in_progress() {
        let state = TicTacToeGameState::default();
        assert_eq!(status_line(&state), "X to move (human vs human)");
    }
}
