//! Engine module - owns the game session and exposes the command API
//!
//! Every command is synchronous and returns a [`Transition`]: a fresh snapshot
//! plus the events the command produced. Illegal moves and rotations are not
//! errors; they leave the state unchanged.

use arrayvec::ArrayVec;
use tracing::{debug, trace};

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::{draw_kind, RandomSource, SimpleRng};
use crate::scoring::{level_for, score_for};
use crate::snapshot::GameSnapshot;
use crate::types::{Command, Direction, EngineEvent};

/// Events produced by a single command (clear, level-up, game over at most).
pub type Events = ArrayVec<EngineEvent, 3>;

/// Result of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub snapshot: GameSnapshot,
    pub events: Events,
}

impl Transition {
    /// The game-over event, if this command ended the session.
    pub fn final_score(&self) -> Option<u32> {
        self.events.iter().find_map(|ev| match ev {
            EngineEvent::GameOver { final_score } => Some(*final_score),
            _ => None,
        })
    }
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct Engine<R = SimpleRng> {
    board: Board,
    current: Option<Piece>,
    next: Piece,
    score: u32,
    level: u32,
    lines: u32,
    game_over: bool,
    paused: bool,
    playing: bool,
    rng: R,
}

impl Engine<SimpleRng> {
    /// Engine driven by the built-in LCG.
    pub fn with_seed(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl Default for Engine<SimpleRng> {
    fn default() -> Self {
        Self::with_seed(1)
    }
}

impl<R: RandomSource> Engine<R> {
    /// Create an idle engine. A next piece is drawn up front; nothing falls
    /// until [`Engine::start`].
    pub fn new(mut rng: R) -> Self {
        let next = Piece::spawn(draw_kind(&mut rng));
        Self {
            board: Board::new(),
            current: None,
            next,
            score: 0,
            level: 1,
            lines: 0,
            game_over: false,
            paused: false,
            playing: false,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.to_grid(),
            current: self.current,
            next: self.next,
            score: self.score,
            level: self.level,
            lines: self.lines,
            game_over: self.game_over,
            paused: self.paused,
            playing: self.playing,
        }
    }

    /// Dispatch a command.
    pub fn apply(&mut self, command: Command) -> Transition {
        match command {
            Command::Start => self.start(),
            Command::Move(direction) => self.move_piece(direction),
            Command::Rotate => self.rotate(),
            Command::HardDrop => self.hard_drop(),
            Command::Tick => self.tick(),
            Command::TogglePause => self.toggle_pause(),
        }
    }

    /// Discard everything and begin a new session. Valid from any state.
    pub fn start(&mut self) -> Transition {
        self.board.clear();
        self.current = Some(self.spawn());
        self.next = self.spawn();
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.game_over = false;
        self.paused = false;
        self.playing = true;

        debug!(
            current = ?self.current.map(|p| p.kind),
            next = ?self.next.kind,
            "session started"
        );
        self.transition(Events::new())
    }

    /// Shift the current piece one cell. A blocked downward move locks it.
    pub fn move_piece(&mut self, direction: Direction) -> Transition {
        let mut events = Events::new();
        if let Some(piece) = self.controllable_piece() {
            let (dx, dy) = direction.offset();
            let candidate = piece.moved(dx, dy);
            if !self.collides(&candidate) {
                self.current = Some(candidate);
            } else if direction == Direction::Down {
                self.lock(&mut events);
            } else {
                trace!(?direction, x = piece.x, y = piece.y, "move rejected");
            }
        }
        self.transition(events)
    }

    /// Rotate the current piece clockwise in place, if it fits.
    pub fn rotate(&mut self) -> Transition {
        if let Some(piece) = self.controllable_piece() {
            let candidate = piece.rotated();
            if !self.collides(&candidate) {
                self.current = Some(candidate);
            } else {
                trace!(kind = ?piece.kind, x = piece.x, y = piece.y, "rotation rejected");
            }
        }
        self.transition(Events::new())
    }

    /// Drop the current piece as far as it goes and lock it immediately.
    pub fn hard_drop(&mut self) -> Transition {
        let mut events = Events::new();
        if let Some(piece) = self.controllable_piece() {
            let mut landed = piece;
            loop {
                let below = landed.moved(0, 1);
                if self.collides(&below) {
                    break;
                }
                landed = below;
            }
            self.current = Some(landed);
            self.lock(&mut events);
        }
        self.transition(events)
    }

    /// One gravity step.
    pub fn tick(&mut self) -> Transition {
        self.move_piece(Direction::Down)
    }

    /// Pause or resume a running session. Ignored otherwise.
    pub fn toggle_pause(&mut self) -> Transition {
        if self.playing && !self.game_over {
            self.paused = !self.paused;
            debug!(paused = self.paused, "pause toggled");
        }
        self.transition(Events::new())
    }

    /// The current piece, if piece-control commands are accepted right now.
    fn controllable_piece(&self) -> Option<Piece> {
        if !self.playing || self.game_over || self.paused {
            return None;
        }
        self.current
    }

    fn collides(&self, piece: &Piece) -> bool {
        self.board.collides(&piece.shape, piece.x, piece.y)
    }

    fn spawn(&mut self) -> Piece {
        Piece::spawn(draw_kind(&mut self.rng))
    }

    /// Merge, clear, score, promote the next piece, and check for game over.
    fn lock(&mut self, events: &mut Events) {
        let Some(piece) = self.current.take() else {
            return;
        };

        let written = self.board.merge(&piece);
        debug!(kind = ?piece.kind, x = piece.x, y = piece.y, written, "piece locked");

        let cleared = self.board.clear_lines();
        if cleared > 0 {
            let points = score_for(cleared);
            self.score = self.score.saturating_add(points);
            self.lines = self.lines.saturating_add(cleared as u32);
            events.push(EngineEvent::LinesCleared {
                count: cleared as u32,
                points,
            });
            debug!(cleared, points, total_lines = self.lines, "lines cleared");

            let level = level_for(self.lines);
            if level > self.level {
                self.level = level;
                events.push(EngineEvent::LevelUp { level });
                debug!(level, "level up");
            }
        }

        let fresh = self.spawn();
        let promoted = std::mem::replace(&mut self.next, fresh);
        let blocked = self.collides(&promoted);
        self.current = Some(promoted);

        if blocked {
            self.game_over = true;
            self.playing = false;
            events.push(EngineEvent::GameOver {
                final_score: self.score,
            });
            debug!(score = self.score, lines = self.lines, "game over");
        }
    }

    fn transition(&self, events: Events) -> Transition {
        Transition {
            snapshot: self.snapshot(),
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Scripted;
    use crate::types::{Color, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

    fn scripted(kinds: &[PieceKind]) -> Engine<Scripted> {
        Engine::new(Scripted::new(kinds.to_vec()))
    }

    fn fill_row_except(engine: &mut Engine<Scripted>, y: i8, gaps: &[i8]) {
        for x in 0..BOARD_WIDTH as i8 {
            if !gaps.contains(&x) {
                engine.board_mut().set(x, y, Some(Color::Red));
            }
        }
    }

    #[test]
    fn test_new_engine_is_idle() {
        let engine = Engine::with_seed(12345);

        assert!(!engine.is_playing());
        assert!(!engine.is_game_over());
        assert!(!engine.is_paused());
        assert!(engine.current().is_none());
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.level(), 1);
        assert_eq!(engine.lines(), 0);
    }

    #[test]
    fn test_commands_before_start_are_noops() {
        let mut engine = Engine::with_seed(3);
        let before = engine.snapshot();

        for cmd in [
            Command::Move(Direction::Left),
            Command::Move(Direction::Down),
            Command::Rotate,
            Command::HardDrop,
            Command::Tick,
            Command::TogglePause,
        ] {
            let t = engine.apply(cmd);
            assert_eq!(t.snapshot, before, "{cmd:?}");
            assert!(t.events.is_empty());
        }
    }

    #[test]
    fn test_start_spawns_pieces() {
        let mut engine = scripted(&[PieceKind::T, PieceKind::S, PieceKind::Z]);
        let t = engine.start();

        assert!(t.snapshot.playing);
        let current = t.snapshot.current.unwrap();
        assert_eq!(current.kind, PieceKind::S);
        assert_eq!((current.x, current.y), (4, 0));
        assert_eq!(t.snapshot.next.kind, PieceKind::Z);
        assert!(t.events.is_empty());
    }

    #[test]
    fn test_move_left_right_down() {
        let mut engine = scripted(&[PieceKind::O]);
        engine.start();

        let t = engine.move_piece(Direction::Left);
        assert_eq!(t.snapshot.current.unwrap().x, 3);
        let t = engine.move_piece(Direction::Right);
        assert_eq!(t.snapshot.current.unwrap().x, 4);
        let t = engine.move_piece(Direction::Down);
        assert_eq!(t.snapshot.current.unwrap().y, 1);
    }

    #[test]
    fn test_blocked_side_move_never_locks() {
        let mut engine = scripted(&[PieceKind::O]);
        engine.start();
        for _ in 0..4 {
            engine.move_piece(Direction::Left);
        }
        let before = engine.snapshot();
        assert_eq!(before.current.unwrap().x, 0);

        let t = engine.move_piece(Direction::Left);
        assert_eq!(t.snapshot, before);
        assert_eq!(t.snapshot.occupied_cells(), 0);
    }

    #[test]
    fn test_blocked_down_move_locks() {
        let mut engine = scripted(&[PieceKind::O]);
        engine.start();
        for _ in 0..18 {
            engine.tick();
        }
        assert_eq!(engine.current().unwrap().y, 18);
        assert_eq!(engine.board().occupied_count(), 0);

        let t = engine.tick();
        assert_eq!(t.snapshot.occupied_cells(), 4);
        let fresh = t.snapshot.current.unwrap();
        assert_eq!((fresh.x, fresh.y), (4, 0));
        assert!(t.events.is_empty());
    }

    #[test]
    fn test_hard_drop_lands_and_locks() {
        let mut engine = scripted(&[PieceKind::I]);
        engine.start();

        let t = engine.hard_drop();
        assert_eq!(t.snapshot.board[19][4], Some(Color::Cyan));
        assert_eq!(t.snapshot.board[19][7], Some(Color::Cyan));
        assert_eq!(t.snapshot.occupied_cells(), 4);
    }

    #[test]
    fn test_rotation_rejected_against_wall() {
        // Vertical I flush against the right wall has no room to lie flat.
        let mut engine = scripted(&[PieceKind::I]);
        engine.start();
        engine.rotate();
        for _ in 0..10 {
            engine.move_piece(Direction::Right);
        }
        let before = engine.snapshot();
        assert_eq!(before.current.unwrap().x, 9);

        let t = engine.rotate();
        assert_eq!(t.snapshot, before);
    }

    #[test]
    fn test_rotation_rejected_by_terrain() {
        let mut engine = scripted(&[PieceKind::I]);
        engine.start();
        engine.board_mut().set(4, 2, Some(Color::Blue));
        let before = engine.snapshot();

        let t = engine.rotate();
        assert_eq!(t.snapshot, before);
    }

    #[test]
    fn test_pause_blocks_piece_control() {
        let mut engine = scripted(&[PieceKind::T]);
        engine.start();
        let t = engine.toggle_pause();
        assert!(t.snapshot.paused);
        let paused = t.snapshot;

        assert_eq!(engine.move_piece(Direction::Left).snapshot, paused);
        assert_eq!(engine.rotate().snapshot, paused);
        assert_eq!(engine.tick().snapshot, paused);
        assert_eq!(engine.hard_drop().snapshot, paused);

        let t = engine.toggle_pause();
        assert!(!t.snapshot.paused);
    }

    #[test]
    fn test_single_clear_scores() {
        let mut engine = scripted(&[PieceKind::I]);
        engine.start();
        fill_row_except(&mut engine, 19, &[4, 5, 6, 7]);

        let t = engine.hard_drop();
        assert_eq!(
            t.events.as_slice(),
            &[EngineEvent::LinesCleared {
                count: 1,
                points: 100
            }]
        );
        assert_eq!(t.snapshot.score, 100);
        assert_eq!(t.snapshot.lines, 1);
        assert_eq!(t.snapshot.level, 1);
        assert_eq!(t.snapshot.occupied_cells(), 0);
    }

    #[test]
    fn test_four_line_clear_scores_and_levels_up() {
        let mut engine = scripted(&[PieceKind::I]);
        engine.start();
        engine.lines = 8;
        engine.rotate();
        for y in 16..BOARD_HEIGHT as i8 {
            fill_row_except(&mut engine, y, &[4]);
        }

        let t = engine.hard_drop();
        assert_eq!(
            t.events.as_slice(),
            &[
                EngineEvent::LinesCleared {
                    count: 4,
                    points: 800
                },
                EngineEvent::LevelUp { level: 2 },
            ]
        );
        assert_eq!(t.snapshot.lines, 12);
        assert_eq!(t.snapshot.level, 2);
    }

    #[test]
    fn test_spawn_collision_ends_game() {
        let mut engine = scripted(&[PieceKind::O]);
        engine.start();
        for _ in 0..4 {
            engine.move_piece(Direction::Left);
        }
        // Terrain under the spawn columns, away from the falling piece.
        engine.board_mut().set(4, 0, Some(Color::Red));
        engine.board_mut().set(5, 0, Some(Color::Red));

        let t = engine.hard_drop();
        assert!(t.snapshot.game_over);
        assert!(!t.snapshot.playing);
        assert!(t.snapshot.current.is_some());
        assert_eq!(t.final_score(), Some(0));

        // Terminal state ignores everything but start.
        let over = t.snapshot;
        assert_eq!(engine.tick().snapshot, over);
        assert_eq!(engine.toggle_pause().snapshot, over);

        let t = engine.start();
        assert!(t.snapshot.playing);
        assert!(!t.snapshot.game_over);
        assert_eq!(t.snapshot.occupied_cells(), 0);
    }

    #[test]
    fn test_game_over_after_clearing_lock() {
        // I falls into a one-row slot, completes row 1, and the terrain on
        // row 0 shifts down under the spawn columns of the following O.
        let mut engine = scripted(&[PieceKind::I, PieceKind::I, PieceKind::O]);
        engine.start();
        engine.move_piece(Direction::Down);

        fill_row_except(&mut engine, 1, &[4, 5, 6, 7]);
        for x in 4..=5 {
            engine.board_mut().set(x, 0, Some(Color::Red));
        }
        for x in 4..=7 {
            engine.board_mut().set(x, 2, Some(Color::Red));
        }

        let t = engine.tick();
        assert_eq!(
            t.events.as_slice(),
            &[
                EngineEvent::LinesCleared {
                    count: 1,
                    points: 100
                },
                EngineEvent::GameOver { final_score: 100 },
            ]
        );
        assert!(t.snapshot.game_over);
        assert_eq!(t.snapshot.current.unwrap().kind, PieceKind::O);
        assert_eq!(t.snapshot.board[1][4], Some(Color::Red));
    }
}
