//! Board tests: bounds, collision, merge and line clearing

use blockfall::core::{base_shape, Board, Piece};
use blockfall::types::{Color, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const W: i8 = BOARD_WIDTH as i8;
const H: i8 = BOARD_HEIGHT as i8;

fn fill_row(board: &mut Board, y: i8, color: Color) {
    for x in 0..W {
        board.set(x, y, Some(color));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..H {
        for x in 0..W {
            assert_eq!(board.get(x, y), Some(None), "cell ({x}, {y}) should be empty");
        }
    }
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_board_get_set_out_of_bounds() {
    let mut board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(W, 0), None);
    assert_eq!(board.get(0, H), None);

    assert!(!board.set(-1, 0, Some(Color::Red)));
    assert!(!board.set(0, H, Some(Color::Red)));
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_board_set_and_clear_cell() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(Color::Purple)));
    assert_eq!(board.get(5, 10), Some(Some(Color::Purple)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert!(!board.is_occupied(5, 10));
}

#[test]
fn test_collision_walls_and_floor() {
    let board = Board::new();
    let i = base_shape(PieceKind::I);

    assert!(!board.collides(&i, 0, 0));
    assert!(!board.collides(&i, W - 4, H - 1));
    assert!(board.collides(&i, -1, 0), "left wall");
    assert!(board.collides(&i, W - 3, 0), "right wall");
    assert!(board.collides(&i, 0, H), "floor");
}

#[test]
fn test_collision_above_top_only_checks_walls() {
    let mut board = Board::new();
    fill_row(&mut board, 0, Color::Blue);

    let vertical = base_shape(PieceKind::I).rotated();
    // Three minos above the grid, the fourth lands on row 0.
    assert!(board.collides(&vertical, 3, -3));
    // Fully above the grid: nothing to hit.
    assert!(!board.collides(&vertical, 3, -4));
    assert!(board.collides(&vertical, -1, -4));
}

#[test]
fn test_collision_with_terrain() {
    let mut board = Board::new();
    board.set(5, 19, Some(Color::Red));

    let o = base_shape(PieceKind::O);
    assert!(board.collides(&o, 4, 18));
    assert!(!board.collides(&o, 6, 18));
    assert!(!board.collides(&o, 4, 17));
}

#[test]
fn test_merge_writes_piece_color() {
    let mut board = Board::new();
    let t = Piece::spawn(PieceKind::T).at(3, 18);

    assert_eq!(board.merge(&t), 4);
    assert_eq!(board.get(4, 18), Some(Some(Color::Purple)));
    for x in 3..=5 {
        assert_eq!(board.get(x, 19), Some(Some(Color::Purple)));
    }
    assert_eq!(board.get(3, 18), Some(None));
}

#[test]
fn test_merge_drops_cells_above_grid() {
    let mut board = Board::new();
    let vertical = Piece::spawn(PieceKind::I).rotated().at(0, -2);

    assert_eq!(board.merge(&vertical), 2);
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_clear_lines_none_full() {
    let mut board = Board::new();
    board.set(0, 19, Some(Color::Cyan));
    let before = board.clone();

    assert_eq!(board.clear_lines(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_lines_keeps_survivor_order() {
    let mut board = Board::new();
    fill_row(&mut board, 19, Color::Red);
    board.set(0, 18, Some(Color::Green));
    fill_row(&mut board, 17, Color::Red);
    board.set(1, 16, Some(Color::Blue));

    assert_eq!(board.clear_lines(), 2);

    assert_eq!(board.get(0, 19), Some(Some(Color::Green)));
    assert_eq!(board.get(1, 18), Some(Some(Color::Blue)));
    assert_eq!(board.occupied_count(), 2);
    for y in 0..18 {
        assert!(!board.is_row_full(y));
    }
}

#[test]
fn test_clear_four_lines() {
    let mut board = Board::new();
    for y in 16..H {
        fill_row(&mut board, y, Color::Orange);
    }
    board.set(9, 15, Some(Color::Yellow));

    assert_eq!(board.clear_lines(), 4);
    assert_eq!(board.get(9, 19), Some(Some(Color::Yellow)));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_clear_entire_board() {
    let mut board = Board::new();
    for y in 0..H {
        fill_row(&mut board, y, Color::Cyan);
    }

    assert_eq!(board.clear_lines(), BOARD_HEIGHT as usize);
    assert_eq!(board, Board::new());
}

#[test]
fn test_grid_round_trip() {
    let mut board = Board::new();
    board.set(2, 3, Some(Color::Blue));
    board.set(9, 19, Some(Color::Red));

    let grid = board.to_grid();
    assert_eq!(grid[3][2], Some(Color::Blue));
    assert_eq!(Board::from_grid(&grid), board);
}
