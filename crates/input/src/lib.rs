//! Terminal input module.
//!
//! Maps `crossterm` key events into engine [`crate::types::Command`]s and
//! filters out commands the engine would ignore anyway, so a host never
//! forwards piece control to a paused or finished game.

pub mod gate;
pub mod map;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use gate::admit;
pub use map::{handle_key_event, should_quit};
