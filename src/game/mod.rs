//! Core game logic for the point-clicking game.
//!
//! This module contains all the rules without any DOM, timer or rendering
//! dependencies: a plain [`GameState`] snapshot and a pure [`reduce`] function
//! that turns `(state, event)` into the next state plus the timer effects the
//! caller has to carry out.

pub mod config;
pub mod event;
pub mod input;
pub mod layout;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use event::{Effect, Event};
pub use input::parse_target_count;
pub use layout::{random_layout, target_at};
pub use reducer::{Step, reduce};
pub use state::{
    GameState, MSG_ALL_CLEARED, MSG_GAME_OVER, MSG_INVALID_COUNT, Outcome, OutcomeKind, Phase,
    Position, Target, format_elapsed,
};
