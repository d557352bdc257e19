//! Bounded command queues for the main and function boards

use crate::{limits, Command};

/// Which board a queue belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueKind {
    Main,
    Function,
}

impl QueueKind {
    /// Maximum number of commands the board holds
    pub fn capacity(self) -> usize {
        match self {
            QueueKind::Main => limits::MAIN_QUEUE_CAPACITY,
            QueueKind::Function => limits::FUNCTION_QUEUE_CAPACITY,
        }
    }

    /// Whether the board may hold this command (no nested function calls)
    pub fn accepts(self, command: Command) -> bool {
        match self {
            QueueKind::Main => true,
            QueueKind::Function => command != Command::InvokeFunction,
        }
    }
}

impl std::fmt::Display for QueueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueueKind::Main => write!(f, "main"),
            QueueKind::Function => write!(f, "function"),
        }
    }
}

/// Append-only command sequence capped at its board's capacity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandQueue {
    kind: QueueKind,
    commands: Vec<Command>,
}

impl CommandQueue {
    /// Create an empty queue for the given board
    pub fn new(kind: QueueKind) -> Self {
        Self {
            kind,
            commands: Vec::with_capacity(kind.capacity()),
        }
    }

    pub fn kind(&self) -> QueueKind {
        self.kind
    }

    pub fn capacity(&self) -> usize {
        self.kind.capacity()
    }

    /// Append a command
    ///
    /// Returns false and leaves the queue unchanged when it is full or the
    /// command is not allowed on this board.
    pub fn push(&mut self, command: Command) -> bool {
        if self.is_full() || !self.kind.accepts(command) {
            return false;
        }
        self.commands.push(command);
        true
    }

    /// Remove every command
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.commands.len() >= self.capacity()
    }

    /// Current contents in execution order
    pub fn as_slice(&self) -> &[Command] {
        &self.commands
    }

    pub fn iter(&self) -> impl Iterator<Item = Command> + '_ {
        self.commands.iter().copied()
    }
}
