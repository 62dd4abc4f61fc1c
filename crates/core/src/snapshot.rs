use serde::{Deserialize, Serialize};

use crate::board::Grid;
use crate::piece::Piece;

/// Immutable copy of everything a renderer or persistence layer may read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Grid,
    pub current: Option<Piece>,
    pub next: Piece,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
    pub paused: bool,
    pub playing: bool,
}

impl GameSnapshot {
    /// Whether piece-control commands would currently be accepted.
    pub fn playable(&self) -> bool {
        self.playing && !self.game_over && !self.paused
    }

    /// Number of occupied board cells (the falling piece is not counted).
    pub fn occupied_cells(&self) -> usize {
        self.board
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_some())
            .count()
    }
}
