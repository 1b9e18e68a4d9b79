//! Rover simulation core.
//!
//! # Data Flow
//! ```text
//! command string ("FLFFR...")
//!     → rover.rs (allow-list check, stop at first bad character)
//!     → position.rs (transition: State × command → State)
//!     → heading.rs (rotation tables, unit deltas)
//!     → Display "(x, y) HEADING"
//! ```
//!
//! # Design Decisions
//! - Everything here is total: malformed input yields the input back
//! - `Position` is the validated value, `State` is whatever the caller handed us
//! - No I/O, no shared state; one `Rover` per request

pub mod command;
pub mod heading;
pub mod position;
pub mod rover;

pub use command::Command;
pub use heading::{Heading, ParseHeadingError};
pub use position::{transition, Position, State};
pub use rover::Rover;
