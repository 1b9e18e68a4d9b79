//! Rover position and the transition function.
//!
//! # Responsibilities
//! - Hold the validated `(x, y, heading)` value
//! - Accept loosely typed caller state and decide whether it is well formed
//! - Compute the next state for one command
//!
//! # Design Decisions
//! - `transition` never fails: malformed state or an unsupported command returns the input
//! - A successful transition returns a fresh, normalized `State`
//! - Coordinates saturate at the `i64` limits instead of overflowing

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::rover::command::Command;
use crate::rover::heading::Heading;

/// A well-formed rover position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
    pub direction: Heading,
}

impl Position {
    pub fn new(x: i64, y: i64, direction: Heading) -> Self {
        Self { x, y, direction }
    }

    /// Apply one command and return the resulting position.
    pub fn apply(self, command: Command) -> Self {
        match command {
            Command::Left => self.rotate(Heading::rotate_left),
            Command::Right => self.rotate(Heading::rotate_right),
            Command::Forward => self.translate(1),
            Command::Backward => self.translate(-1),
        }
    }

    fn rotate(self, turn: fn(Heading) -> Heading) -> Self {
        Self {
            direction: turn(self.direction),
            ..self
        }
    }

    // Clamped at the i64 limits: a rover pressed against the edge stays there,
    // so F then B only round-trips away from the limits.
    fn translate(self, step: i64) -> Self {
        let (dx, dy) = self.direction.delta();
        Self {
            x: self.x.saturating_add(dx * step),
            y: self.y.saturating_add(dy * step),
            direction: self.direction,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(0, 0, Heading::North)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) {}", self.x, self.y, self.direction)
    }
}

/// Rover state as supplied by a caller.
///
/// Fields are kept as raw JSON values; nothing is validated until the state
/// is fed to [`transition`]. A missing field is `None`, an explicit `null`
/// is `Some(Value::Null)`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct State {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub x: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub y: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub direction: Option<Value>,
}

// Only called for keys that are present, so `null` stays distinguishable from absent.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl State {
    /// The validated position, or `None` if the state is malformed.
    pub fn position(&self) -> Option<Position> {
        let x = self.x.as_ref().and_then(as_integer)?;
        let y = self.y.as_ref().and_then(as_integer)?;
        let direction = self
            .direction
            .as_ref()
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<Heading>().ok())?;
        Some(Position::new(x, y, direction))
    }

    pub fn is_valid(&self) -> bool {
        self.position().is_some()
    }
}

impl From<Position> for State {
    fn from(p: Position) -> Self {
        Self {
            x: Some(Value::from(p.x)),
            y: Some(Value::from(p.y)),
            direction: Some(Value::from(p.direction.as_str())),
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position() {
            Some(p) => fmt::Display::fmt(&p, f),
            None => write!(
                f,
                "({}, {}) {}",
                RawField(self.x.as_ref()),
                RawField(self.y.as_ref()),
                RawField(self.direction.as_ref())
            ),
        }
    }
}

struct RawField<'a>(Option<&'a Value>);

impl fmt::Display for RawField<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => f.write_str("undefined"),
            Some(Value::Null) => f.write_str("null"),
            Some(Value::String(s)) => f.write_str(s),
            Some(other) => write!(f, "{}", other),
        }
    }
}

/// Interpret a JSON value as an integer coordinate.
///
/// Accepts integers, floats without a fractional part and strings holding a
/// decimal integer.
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Compute the state that follows `state` under `command`.
///
/// Returns `state` unchanged when it is malformed or when `command` is not
/// exactly one of `F`, `B`, `L`, `R`.
pub fn transition(state: &State, command: &str) -> State {
    let Some(position) = state.position() else {
        return state.clone();
    };
    match Command::parse(command) {
        Some(cmd) => position.apply(cmd).into(),
        None => state.clone(),
    }
}
