//! User actions typed at the prompt

use robot_board_shared::{Command, QueueKind};
use std::str::FromStr;
use thiserror::Error;

/// Help text listing every action
pub const HELP: &str = "\
commands:
  f | l | r | p      add forward / left / right / function call to the main board
  ff | fl | fr       add forward / left / right to the function board
  run                run the main board
  reset              clear both boards and return the robot to the start
  show               redraw the board
  help               show this help
  quit               exit";

/// Something the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Append(QueueKind, Command),
    Run,
    Reset,
    Show,
    Help,
    Quit,
}

/// Errors that can occur while parsing an action
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionParseError {
    #[error("Empty input")]
    Empty,

    #[error("Unknown action '{0}' (type 'help' for a list)")]
    Unknown(String),
}

impl FromStr for UserAction {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim().to_ascii_lowercase();
        let action = match word.as_str() {
            "" => return Err(ActionParseError::Empty),
            "f" | "forward" => UserAction::Append(QueueKind::Main, Command::Forward),
            "l" | "left" => UserAction::Append(QueueKind::Main, Command::Left),
            "r" | "right" => UserAction::Append(QueueKind::Main, Command::Right),
            "p" | "function" => UserAction::Append(QueueKind::Main, Command::InvokeFunction),
            "ff" => UserAction::Append(QueueKind::Function, Command::Forward),
            "fl" => UserAction::Append(QueueKind::Function, Command::Left),
            "fr" => UserAction::Append(QueueKind::Function, Command::Right),
            "run" | "go" => UserAction::Run,
            "reset" => UserAction::Reset,
            "show" => UserAction::Show,
            "help" | "?" => UserAction::Help,
            "quit" | "exit" | "q" => UserAction::Quit,
            _ => return Err(ActionParseError::Unknown(word)),
        };
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board_actions() {
        assert_eq!(
            "F".parse::<UserAction>(),
            Ok(UserAction::Append(QueueKind::Main, Command::Forward))
        );
        assert_eq!(
            " p ".parse::<UserAction>(),
            Ok(UserAction::Append(QueueKind::Main, Command::InvokeFunction))
        );
        assert_eq!(
            "fr".parse::<UserAction>(),
            Ok(UserAction::Append(QueueKind::Function, Command::Right))
        );
    }

    #[test]
    fn test_parse_control_actions() {
        assert_eq!("run".parse::<UserAction>(), Ok(UserAction::Run));
        assert_eq!("RESET".parse::<UserAction>(), Ok(UserAction::Reset));
        assert_eq!("quit".parse::<UserAction>(), Ok(UserAction::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("   ".parse::<UserAction>(), Err(ActionParseError::Empty));
        assert_eq!(
            "jump".parse::<UserAction>(),
            Err(ActionParseError::Unknown("jump".into()))
        );
    }
}
