//! Text notation for board programs
//!
//! A program is written one symbol per command:
//! ```text
//! F = forward   L = left   R = right   P = call the function board
//! ```
//!
//! Symbols are case-insensitive. Whitespace, `,` and `;` are ignored so
//! programs can be grouped for readability (`"FF R, P"`).

use thiserror::Error;

use crate::{Command, QueueKind};

/// Errors that can occur while parsing a program
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Unknown command symbol '{symbol}' at position {position}")]
    UnknownSymbol { symbol: char, position: usize },

    #[error("Function board cannot call itself (position {position})")]
    NestedFunction { position: usize },

    #[error("Program too long: {len} commands (max: {capacity})")]
    TooLong { len: usize, capacity: usize },
}

/// Decode a single symbol
pub fn decode_symbol(symbol: char) -> Option<Command> {
    match symbol.to_ascii_uppercase() {
        'F' => Some(Command::Forward),
        'L' => Some(Command::Left),
        'R' => Some(Command::Right),
        'P' => Some(Command::InvokeFunction),
        _ => None,
    }
}

fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == ',' || c == ';'
}

/// Parse a program for the given board
///
/// Positions in errors are character offsets into `text`.
pub fn parse_program(kind: QueueKind, text: &str) -> Result<Vec<Command>, CodecError> {
    let mut commands = Vec::new();

    for (position, symbol) in text.chars().enumerate() {
        if is_separator(symbol) {
            continue;
        }

        let command =
            decode_symbol(symbol).ok_or(CodecError::UnknownSymbol { symbol, position })?;

        if !kind.accepts(command) {
            return Err(CodecError::NestedFunction { position });
        }

        commands.push(command);
    }

    if commands.len() > kind.capacity() {
        return Err(CodecError::TooLong {
            len: commands.len(),
            capacity: kind.capacity(),
        });
    }

    Ok(commands)
}

/// Write a program in canonical form
pub fn format_program(commands: &[Command]) -> String {
    commands.iter().map(|c| c.symbol()).collect()
}
