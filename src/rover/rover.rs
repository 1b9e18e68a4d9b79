//! The stateful rover wrapper.

use std::fmt;

use crate::rover::command::Command;
use crate::rover::heading::Heading;
use crate::rover::position::{transition, Position, State};

/// A rover holding exactly one state.
///
/// The state is replaced, never edited, on every applied command.
#[derive(Debug, Clone, PartialEq)]
pub struct Rover {
    state: State,
}

impl Default for Rover {
    fn default() -> Self {
        Self {
            state: Position::default().into(),
        }
    }
}

impl Rover {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to a well-formed position.
    pub fn init(&mut self, x: i64, y: i64, direction: Heading) {
        self.state = Position::new(x, y, direction).into();
    }

    /// Replace the whole state. No validation happens here.
    pub fn set_state(&mut self, state: State) {
        self.state = state;
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Run `commands` left to right.
    ///
    /// Stops at the first character outside [`Command::ALLOWED`]; nothing after
    /// it is applied, even valid commands. Returns how many commands were applied.
    pub fn execute(&mut self, commands: &str) -> usize {
        let mut applied = 0;
        let mut buf = [0u8; 4];
        for c in commands.chars() {
            if !Command::ALLOWED.contains(&c) {
                tracing::debug!(
                    command = %c,
                    applied,
                    "Disallowed command, halting execution"
                );
                break;
            }
            let next = transition(&self.state, c.encode_utf8(&mut buf));
            tracing::trace!(command = %c, from = %self.state, to = %next, "Command applied");
            self.set_state(next);
            applied += 1;
        }
        applied
    }
}

impl fmt::Display for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.state, f)
    }
}
