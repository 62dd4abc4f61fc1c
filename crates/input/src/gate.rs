//! Drop commands the engine would ignore for the current state.

use crate::core::GameSnapshot;
use crate::types::Command;

/// Whether `command` should be forwarded to the engine.
///
/// Piece control only reaches a running, unpaused game. `Start` and
/// `TogglePause` always pass; the engine decides what they mean.
pub fn admit(command: Command, snapshot: &GameSnapshot) -> bool {
    if command.is_piece_control() {
        snapshot.playable()
    } else {
        true
    }
}
