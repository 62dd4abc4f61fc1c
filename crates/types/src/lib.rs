//! Core types module - shared data structures and constants
//!
//! Plain data used by the engine, the input mapper and the renderer. Nothing in
//! here performs I/O or owns game rules.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn column**: `BOARD_WIDTH / 2 - 1`
//!
//! # Gravity
//!
//! The engine never looks at a clock. Hosts call `tick` every
//! `max(MIN_GRAVITY_MS, BASE_GRAVITY_MS - (level - 1) * GRAVITY_STEP_MS)`:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 800ms |
//! | 2 | 740ms |
//! | 5 | 560ms |
//! | 10 | 260ms |
//! | 11+ | 200ms (floor) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, Direction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Command::from_str("moveLeft"), Some(Command::Move(Direction::Left)));
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval at level 1.
pub const BASE_GRAVITY_MS: u32 = 800;

/// Gravity speed-up per level.
pub const GRAVITY_STEP_MS: u32 = 60;

/// Fastest gravity interval.
pub const MIN_GRAVITY_MS: u32 = 200;

/// Cumulative lines needed per level step.
pub const LINES_PER_LEVEL: u32 = 10;

/// Points for clearing N rows in a single lock (index = rows).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The seven piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// Position of this kind in [`PieceKind::ALL`].
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }
}

/// Display token attached to occupied cells.
///
/// The engine only compares cells for occupancy; renderers decide what a
/// color looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

impl Color {
    /// 24-bit color suggestion for terminal renderers.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Cyan => (0, 240, 240),
            Color::Yellow => (240, 240, 0),
            Color::Purple => (160, 0, 240),
            Color::Green => (0, 240, 0),
            Color::Red => (240, 0, 0),
            Color::Blue => (0, 0, 240),
            Color::Orange => (240, 160, 0),
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Occupied, painted with the color of the piece that locked there
pub type Cell = Option<Color>;

/// Direction of a single-cell move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// `(dx, dy)` applied to the piece anchor.
    pub fn offset(&self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Commands a host can issue to the engine.
///
/// These are the only way anything outside the core changes game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Reset everything and begin a new session
    Start,
    /// Shift the current piece by one cell
    Move(Direction),
    /// Rotate the current piece 90° clockwise
    Rotate,
    /// Drop the current piece to its resting row and lock it
    HardDrop,
    /// One gravity step (same as moving down)
    Tick,
    /// Pause or resume
    TogglePause,
}

impl Command {
    /// Parse a command from its camelCase name
    ///
    /// ```
    /// use blockfall_types::{Command, Direction};
    ///
    /// assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
    /// assert_eq!(Command::from_str("movedown"), Some(Command::Move(Direction::Down)));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(Command::Start),
            "moveleft" => Some(Command::Move(Direction::Left)),
            "moveright" => Some(Command::Move(Direction::Right)),
            "movedown" => Some(Command::Move(Direction::Down)),
            "rotate" => Some(Command::Rotate),
            "harddrop" => Some(Command::HardDrop),
            "tick" => Some(Command::Tick),
            "togglepause" => Some(Command::TogglePause),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Move(Direction::Left) => "moveLeft",
            Command::Move(Direction::Right) => "moveRight",
            Command::Move(Direction::Down) => "moveDown",
            Command::Rotate => "rotate",
            Command::HardDrop => "hardDrop",
            Command::Tick => "tick",
            Command::TogglePause => "togglePause",
        }
    }

    /// Commands that manipulate the falling piece.
    pub fn is_piece_control(&self) -> bool {
        matches!(
            self,
            Command::Move(_) | Command::Rotate | Command::HardDrop | Command::Tick
        )
    }
}

/// Observable side effects of a command.
///
/// Emitted in lock order: a clear, then a level change, then game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    LinesCleared { count: u32, points: u32 },
    LevelUp { level: u32 },
    GameOver { final_score: u32 },
}
