use std::str::FromStr;
use tictactoe_common::tictactoe::{CELL_COUNT, GameMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    PlaceMark { index: usize },
    Restart,
    SwitchMode(GameMode),
    Help,
    Quit,
}

impl FromStr for ClientCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_ascii_lowercase();
        match input.as_str() {
            "r" | "restart" | "reset" => Ok(ClientCommand::Restart),
            "pvp" => Ok(ClientCommand::SwitchMode(GameMode::HumanVsHuman)),
            "pva" => Ok(ClientCommand::SwitchMode(GameMode::HumanVsComputer)),
            "h" | "help" | "?" => Ok(ClientCommand::Help),
            "q" | "quit" | "exit" => Ok(ClientCommand::Quit),
            "" => Err("Empty command".to_string()),
            other => match other.parse::<usize>() {
                Ok(index) if index < CELL_COUNT => Ok(ClientCommand::PlaceMark { index }),
                Ok(index) => Err(format!("Cell {} is out of range 0..=8", index)),
                Err(_) => Err(format!("Unknown command '{}'", other)),
            },
        }
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  0-8        place a mark in that cell (row-major, 0 is top-left)
  r          restart the game
  pvp        switch to human vs human and restart
  pva        switch to human vs computer and restart
  h          show this help
  q          quit";
