use std::io::Write;
use std::time::Duration;
use tictactoe_common::tictactoe::{BotInput, GameError, GameMode, TicTacToeGameState, calculate_move};
use tictactoe_common::{log, log_error};

use crate::state::{ClientCommand, HELP_TEXT};
use crate::ui::{render_board, status_line};

#[derive(Debug)]
pub enum ClientError {
    Game(GameError),
    Join(tokio::task::JoinError),
    Io(std::io::Error),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Game(e) => write!(f, "Game error: {}", e),
            ClientError::Join(e) => write!(f, "Search task failed: {}", e),
            ClientError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<GameError> for ClientError {
    fn from(e: GameError) -> Self {
        ClientError::Game(e)
    }
}

impl From<tokio::task::JoinError> for ClientError {
    fn from(e: tokio::task::JoinError) -> Self {
        ClientError::Join(e)
    }
}

impl From<std::io::Error> for ClientError {
    fn from(e: std::io::Error) -> Self {
        ClientError::Io(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    Quit,
}

/// One game on this terminal. Owns the game state and drives the computer's
/// replies: human move, pause, search, computer move.
pub struct LocalGame<W: Write> {
    state: TicTacToeGameState,
    computer_delay: Duration,
    show_cell_numbers: bool,
    out: W,
}

impl<W: Write> LocalGame<W> {
    pub fn new(mode: GameMode, computer_delay: Duration, show_cell_numbers: bool, out: W) -> Self {
        Self {
            state: TicTacToeGameState::new(mode),
            computer_delay,
            show_cell_numbers,
            out,
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn render(&mut self) -> Result<(), ClientError> {
        let board = render_board(&self.state, self.show_cell_numbers);
        writeln!(self.out, "\n{}\n{}", board, status_line(&self.state))?;
        if !self.state.is_active() {
            writeln!(self.out, "Type 'r' to play again.")?;
        }
        Ok(())
    }

    pub async fn handle_command(&mut self, command: ClientCommand) -> Result<CommandOutcome, ClientError> {
        match command {
            ClientCommand::PlaceMark { index } => {
                self.place_human_mark(index).await?;
            }
            ClientCommand::Restart => {
                self.state.reset();
                log!("Game restarted ({})", self.state.mode());
                self.render()?;
            }
            ClientCommand::SwitchMode(mode) => {
                self.state.reset_with_mode(mode);
                log!("Switched to {}", mode);
                self.render()?;
            }
            ClientCommand::Help => {
                writeln!(self.out, "{}", HELP_TEXT)?;
            }
            ClientCommand::Quit => return Ok(CommandOutcome::Quit),
        }
        Ok(CommandOutcome::Continue)
    }

    async fn place_human_mark(&mut self, index: usize) -> Result<(), ClientError> {
        if self.state.is_computer_turn() {
            writeln!(self.out, "Wait for the computer to move.")?;
            return Ok(());
        }

        let mark = self.state.current_mark();
        match self.state.apply_move(index, mark) {
            Ok(status) => {
                log!("{} played {} -> {:?}", mark, index, status);
            }
            Err(e @ GameError::InvalidMove(_)) => {
                log!("Ignoring input {}: {}", index, e);
                writeln!(self.out, "{}", e)?;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }

        self.render()?;

        if self.state.is_computer_turn() {
            self.play_computer_turn().await?;
        }
        Ok(())
    }

    /// Waits the configured delay, searches off the async thread, then applies the result.
    pub async fn play_computer_turn(&mut self) -> Result<(), ClientError> {
        if !self.computer_delay.is_zero() {
            tokio::time::sleep(self.computer_delay).await;
        }

        let input = BotInput::from_game_state(&self.state);
        let calculated_move = tokio::task::spawn_blocking(move || calculate_move(&input)).await?;

        let index = match calculated_move {
            Ok(Some(index)) => index,
            Ok(None) => return Ok(()),
            Err(e) => {
                log_error!("Search rejected the board: {}", e);
                return Err(e.into());
            }
        };

        let mark = self.state.current_mark();
        let status = self.state.apply_move(index, mark)?;
        log!("Computer played {} at {} -> {:?}", mark, index, status);
        self.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::tictactoe::{GameStatus, Mark};

    fn game(mode: GameMode) -> LocalGame<Vec<u8>> {
        LocalGame::new(mode, Duration::ZERO, true, Vec::new())
    }

    fn output(game: &LocalGame<Vec<u8>>) -> String {
        String::from_utf8_lossy(game.output()).to_string()
    }

    #[tokio::test]
    async fn test_human_vs_human_alternates() {
        let mut game = game(GameMode::HumanVsHuman);
        game.handle_command(ClientCommand::PlaceMark { index: 4 }).await.unwrap();
        game.handle_command(ClientCommand::PlaceMark { index: 0 }).await.unwrap();

        assert_eq!(game.state().board().get(4), Some(Mark::X));
        assert_eq!(game.state().board().get(0), Some(Mark::O));
        assert_eq!(game.state().current_mark(), Mark::X);
    }

    #[tokio::test]
    async fn test_computer_replies_after_human_move() {
        let mut game = game(GameMode::HumanVsComputer);
        game.handle_command(ClientCommand::PlaceMark { index: 4 }).await.unwrap();

        let board = game.state().board();
        assert_eq!(board.count(Mark::X), 1);
        assert_eq!(board.count(Mark::O), 1);
        assert_eq!(game.state().current_mark(), Mark::X);
        assert!(game.state().is_active());
    }

    #[tokio::test]
    async fn test_computer_blocks_immediate_threat() {
        let mut game = game(GameMode::HumanVsComputer);
        game.handle_command(ClientCommand::PlaceMark { index: 4 }).await.unwrap();
        // Computer answers the center with corner 0.
        assert_eq!(game.state().board().get(0), Some(Mark::O));

        game.handle_command(ClientCommand::PlaceMark { index: 1 }).await.unwrap();
        assert_eq!(game.state().board().get(7), Some(Mark::O));
    }

    #[tokio::test]
    async fn test_occupied_cell_is_ignored() {
        let mut game = game(GameMode::HumanVsHuman);
        game.handle_command(ClientCommand::PlaceMark { index: 4 }).await.unwrap();
        let outcome = game.handle_command(ClientCommand::PlaceMark { index: 4 }).await.unwrap();

        assert_eq!(outcome, CommandOutcome::Continue);
        assert_eq!(game.state().current_mark(), Mark::O);
        assert!(output(&game).contains("cell 4 is already marked"));
    }

    #[tokio::test]
    async fn test_computer_never_loses_to_fixed_sequence() {
        let mut game = game(GameMode::HumanVsComputer);
        for index in [0, 8, 2, 6, 1, 3, 5, 7] {
            if !game.state().is_active() {
                break;
            }
            game.handle_command(ClientCommand::PlaceMark { index }).await.unwrap();
        }
        assert_ne!(game.state().status(), GameStatus::XWon);
    }

    #[tokio::test]
    async fn test_switch_mode_and_restart() {
        let mut game = game(GameMode::HumanVsHuman);
        game.handle_command(ClientCommand::PlaceMark { index: 4 }).await.unwrap();
        game.handle_command(ClientCommand::SwitchMode(GameMode::HumanVsComputer)).await.unwrap();

        assert_eq!(game.state().mode(), GameMode::HumanVsComputer);
        assert_eq!(game.state().board().count(Mark::Empty), 9);

        game.handle_command(ClientCommand::PlaceMark { index: 0 }).await.unwrap();
        game.handle_command(ClientCommand::Restart).await.unwrap();
        assert_eq!(game.state().board().count(Mark::Empty), 9);
        assert_eq!(game.state().current_mark(), Mark::X);
    }

    #[tokio::test]
    async fn test_quit() {
        let mut game = game(GameMode::HumanVsHuman);
        let outcome = game.handle_command(ClientCommand::Quit).await.unwrap();
        assert_eq!(outcome, CommandOutcome::Quit);
    }
}
