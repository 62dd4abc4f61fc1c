//! Rendering tests: locked cells and the falling piece land where expected

use blockfall::core::{Engine, Scripted};
use blockfall::term::{GameView, Hud, Rgb, Viewport};
use blockfall::types::{Color, PieceKind};

// 80x24 viewport, 2x1 cells: the frame starts at (21, 1), cell (0, 0) at (22, 2).
fn screen_pos(x: u16, y: u16) -> (u16, u16) {
    (22 + x * 2, 2 + y)
}

#[test]
fn test_locked_piece_is_rendered() {
    let mut engine = Engine::new(Scripted::repeat(PieceKind::O));
    engine.start();
    let snap = engine.hard_drop().snapshot;

    let fb = GameView::default().render(&snap, &Hud::default(), Viewport::new(80, 24));

    for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
        let (px, py) = screen_pos(x, y);
        for dx in 0..2 {
            let cell = fb.get(px + dx, py).unwrap();
            assert_eq!(cell.ch, '█', "board cell ({x}, {y})");
            assert_eq!(cell.style.fg, Rgb::from(Color::Yellow));
        }
    }

    let (px, py) = screen_pos(0, 19);
    assert_eq!(fb.get(px, py).unwrap().ch, '·');
}

#[test]
fn test_falling_piece_is_rendered() {
    let mut engine = Engine::new(Scripted::repeat(PieceKind::T));
    let snap = engine.start().snapshot;

    let fb = GameView::default().render(&snap, &Hud::default(), Viewport::new(80, 24));

    // T at spawn: nub at (5, 0), bar across row 1.
    let (px, py) = screen_pos(5, 0);
    assert_eq!(fb.get(px, py).unwrap().ch, '█');
    let (px, py) = screen_pos(4, 0);
    assert_eq!(fb.get(px, py).unwrap().ch, '·');
    for x in 4..=6 {
        let (px, py) = screen_pos(x, 1);
        assert_eq!(fb.get(px, py).unwrap().style.fg, Rgb::from(Color::Purple));
    }
}

#[test]
fn test_border_frames_the_board() {
    let engine = Engine::new(Scripted::repeat(PieceKind::I));
    let fb = GameView::default().render(&engine.snapshot(), &Hud::default(), Viewport::new(80, 24));

    assert_eq!(fb.get(21, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(21 + 21, 1).unwrap().ch, '┐');
    assert_eq!(fb.get(21, 22).unwrap().ch, '└');
}

#[test]
fn test_best_score_never_below_current() {
    let mut engine = Engine::new(Scripted::repeat(PieceKind::O));
    let snap = engine.start().snapshot;
    let hud = Hud {
        high_score: 4321,
        message: None,
    };
    let fb = GameView::default().render(&snap, &hud, Viewport::new(80, 24));
    let text: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert!(text.contains("BEST"));
    assert!(text.contains("4321"));
}
