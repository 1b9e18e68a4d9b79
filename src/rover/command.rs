//! Single-character rover commands.

use std::fmt;

/// A rover instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `F`: one step along the current heading.
    Forward,
    /// `B`: one step against the current heading.
    Backward,
    /// `L`: rotate 90 degrees left.
    Left,
    /// `R`: rotate 90 degrees right.
    Right,
}

impl Command {
    /// Characters `Rover::execute` accepts before it stops.
    pub const ALLOWED: [char; 4] = ['F', 'B', 'L', 'R'];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'F' => Some(Command::Forward),
            'B' => Some(Command::Backward),
            'L' => Some(Command::Left),
            'R' => Some(Command::Right),
            _ => None,
        }
    }

    /// Parse a command given as a string.
    ///
    /// Only a string holding exactly one allowed character is a command;
    /// `""`, `"FF"` and `"LEAP_FORWARD"` are not.
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Command::Forward => 'F',
            Command::Backward => 'B',
            Command::Left => 'L',
            Command::Right => 'R',
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
