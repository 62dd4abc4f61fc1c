//! Shape catalog - base matrices and colors for the seven piece kinds
//!
//! Shapes are small 0/1 matrices (at most 4x4). Rotation never mutates a
//! catalog entry; it builds a new matrix from the current one.

use serde::{Deserialize, Serialize};

use crate::types::{Color, PieceKind};

/// Largest side of any shape matrix.
pub const MAX_SHAPE_SIDE: usize = 4;

/// Offset of a single mino relative to the piece anchor, as `(dx, dy)`.
pub type MinoOffset = (i8, i8);

/// A `rows x cols` occupancy matrix stored in a fixed 4x4 array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl Shape {
    const fn new(rows: u8, cols: u8, cells: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE]) -> Self {
        Self { rows, cols, cells }
    }

    /// Build a shape from rows of 0/1 values.
    ///
    /// Panics if the matrix is empty, ragged or larger than 4x4.
    pub fn from_matrix(matrix: &[&[u8]]) -> Self {
        let rows = matrix.len();
        assert!(
            (1..=MAX_SHAPE_SIDE).contains(&rows),
            "shape must have 1..=4 rows, got {rows}"
        );
        let cols = matrix[0].len();
        assert!(
            (1..=MAX_SHAPE_SIDE).contains(&cols),
            "shape must have 1..=4 columns, got {cols}"
        );

        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (r, row) in matrix.iter().enumerate() {
            assert_eq!(row.len(), cols, "shape rows must all be {cols} wide");
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v != 0;
            }
        }

        Self::new(rows as u8, cols as u8, cells)
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether local cell (row, col) is filled. Out-of-range is empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Occupied cells as `(dx, dy)` offsets, row-major.
    pub fn minos(&self) -> impl Iterator<Item = MinoOffset> + '_ {
        (0..self.rows as usize).flat_map(move |r| {
            (0..self.cols as usize)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (c as i8, r as i8))
        })
    }

    /// 90° clockwise rotation: transpose, then reverse each row.
    pub fn rotated(&self) -> Self {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (i, out_row) in cells.iter_mut().enumerate().take(cols) {
            for (j, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.cells[rows - 1 - j][i];
            }
        }
        Self::new(self.cols, self.rows, cells)
    }

    /// Row-major 0/1 rows, mostly for tests and debugging.
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        (0..self.rows as usize)
            .map(|r| {
                (0..self.cols as usize)
                    .map(|c| u8::from(self.cells[r][c]))
                    .collect()
            })
            .collect()
    }
}

/// Catalog entry for one piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDef {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
}

const X: bool = true;
const O: bool = false;

/// Indexed by [`PieceKind::index`].
static CATALOG: [ShapeDef; 7] = [
    ShapeDef {
        kind: PieceKind::I,
        shape: Shape::new(1, 4, [[X, X, X, X], [O; 4], [O; 4], [O; 4]]),
        color: Color::Cyan,
    },
    ShapeDef {
        kind: PieceKind::O,
        shape: Shape::new(2, 2, [[X, X, O, O], [X, X, O, O], [O; 4], [O; 4]]),
        color: Color::Yellow,
    },
    ShapeDef {
        kind: PieceKind::T,
        shape: Shape::new(2, 3, [[O, X, O, O], [X, X, X, O], [O; 4], [O; 4]]),
        color: Color::Purple,
    },
    ShapeDef {
        kind: PieceKind::S,
        shape: Shape::new(2, 3, [[O, X, X, O], [X, X, O, O], [O; 4], [O; 4]]),
        color: Color::Green,
    },
    ShapeDef {
        kind: PieceKind::Z,
        shape: Shape::new(2, 3, [[X, X, O, O], [O, X, X, O], [O; 4], [O; 4]]),
        color: Color::Red,
    },
    ShapeDef {
        kind: PieceKind::J,
        shape: Shape::new(2, 3, [[X, O, O, O], [X, X, X, O], [O; 4], [O; 4]]),
        color: Color::Blue,
    },
    ShapeDef {
        kind: PieceKind::L,
        shape: Shape::new(2, 3, [[O, O, X, O], [X, X, X, O], [O; 4], [O; 4]]),
        color: Color::Orange,
    },
];

/// Catalog entry for a kind.
pub fn definition(kind: PieceKind) -> &'static ShapeDef {
    &CATALOG[kind.index()]
}

/// Unrotated matrix for a kind.
pub fn base_shape(kind: PieceKind) -> Shape {
    definition(kind).shape
}

pub fn color_of(kind: PieceKind) -> Color {
    definition(kind).color
}
