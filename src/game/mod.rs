//! Playing a game turn by turn
//!
//! Autoplay against a known secret and manual play from outside feedback go
//! through the same [`GameSimulator`] state machine.

mod simulator;
mod state;

pub use simulator::{FeedbackSource, GameSimulator, KnownSecret};
pub use state::{DEFAULT_MAX_TURNS, GameConfig, SolveResult, TurnState};
