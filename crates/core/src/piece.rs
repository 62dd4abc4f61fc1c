//! Piece module - the falling shape
//!
//! A `Piece` is plain data: kind, anchor, current matrix and color. It never
//! validates itself against a board; the engine decides whether a moved or
//! rotated piece is accepted.

use serde::{Deserialize, Serialize};

use crate::shapes::{definition, Shape};
use crate::types::{Color, PieceKind, BOARD_WIDTH};

/// Anchor column for freshly spawned pieces.
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 1;

/// Anchor row for freshly spawned pieces.
pub const SPAWN_Y: i8 = 0;

/// Falling piece. (x, y) is the top-left corner of `shape` on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    pub shape: Shape,
    pub color: Color,
}

impl Piece {
    /// Create a piece of `kind` at the spawn anchor with its catalog matrix.
    pub fn spawn(kind: PieceKind) -> Self {
        let def = definition(kind);
        Self {
            kind,
            x: SPAWN_X,
            y: SPAWN_Y,
            shape: def.shape,
            color: def.color,
        }
    }

    /// Same shape at a new anchor.
    pub fn at(self, x: i8, y: i8) -> Self {
        Self { x, y, ..self }
    }

    /// Same shape shifted by (dx, dy).
    pub fn moved(self, dx: i8, dy: i8) -> Self {
        self.at(self.x + dx, self.y + dy)
    }

    /// Same anchor, matrix rotated 90° clockwise. No kick search.
    pub fn rotated(self) -> Self {
        Self {
            shape: self.shape.rotated(),
            ..self
        }
    }

    /// Absolute board coordinates of every mino.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .minos()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::base_shape;

    #[test]
    fn test_spawn_position() {
        let piece = Piece::spawn(PieceKind::T);

        assert_eq!(piece.kind, PieceKind::T);
        assert_eq!(piece.x, 4);
        assert_eq!(piece.y, 0);
        assert_eq!(piece.shape, base_shape(PieceKind::T));
        assert_eq!(piece.color, Color::Purple);
    }

    #[test]
    fn test_rotation_keeps_anchor_and_color() {
        let piece = Piece::spawn(PieceKind::L).at(2, 7);
        let rotated = piece.rotated();

        assert_eq!((rotated.x, rotated.y), (2, 7));
        assert_eq!(rotated.kind, PieceKind::L);
        assert_eq!(rotated.color, piece.color);
        assert_eq!(rotated.shape, piece.shape.rotated());
        // The source piece is untouched.
        assert_eq!(piece.shape, base_shape(PieceKind::L));
    }

    #[test]
    fn test_moved() {
        let piece = Piece::spawn(PieceKind::O).moved(-1, 0).moved(0, 1);
        assert_eq!((piece.x, piece.y), (SPAWN_X - 1, 1));
    }

    #[test]
    fn test_cells_are_absolute() {
        let piece = Piece::spawn(PieceKind::O).at(3, 5);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(3, 5), (4, 5), (3, 6), (4, 6)]);
    }
}
