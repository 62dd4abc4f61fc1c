//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules and state of a falling-block session. It
//! has no dependencies on rendering, input devices or the file system, so
//! it runs the same in a terminal, in a test, or in a headless simulation.
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven base matrices and their colors
//! - [`board`]: 10x20 grid with collision testing, merge and line clearing
//! - [`piece`]: falling piece data and its rotated/moved variants
//! - [`scoring`]: points per clear, level thresholds, gravity speed
//! - [`rng`]: injectable randomness for uniform piece selection
//! - [`engine`]: session state machine and the command API
//! - [`snapshot`]: immutable state copies handed to hosts
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every spawn picks any of the 7 kinds, repeats allowed
//! - **Naive rotation**: 90° clockwise in place, rejected if it collides (no kicks)
//! - **Immediate lock**: a blocked downward move or a hard drop locks at once
//! - **Scoring**: 100 / 300 / 500 / 800 for 1-4 rows, level every 10 lines
//! - **Game over**: the piece promoted after a lock overlaps terrain at spawn
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Engine, Scripted};
//! use blockfall_core::types::{Command, Direction, PieceKind};
//!
//! let mut engine = Engine::new(Scripted::repeat(PieceKind::O));
//! engine.start();
//!
//! engine.apply(Command::Move(Direction::Left));
//! engine.apply(Command::Rotate);
//! let step = engine.apply(Command::HardDrop);
//!
//! assert_eq!(step.snapshot.occupied_cells(), 4);
//! assert!(step.events.is_empty());
//! ```
//!
//! # Timing
//!
//! The engine has no clock. Hosts call [`Engine::tick`] every
//! [`gravity_interval_ms`]`(level)` milliseconds while the game is running
//! and not paused.

pub mod board;
pub mod engine;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Grid};
pub use engine::{Engine, Events, Transition};
pub use piece::Piece;
pub use rng::{draw_kind, RandomSource, Scripted, SimpleRng, StdRandom};
pub use scoring::{gravity_interval_ms, level_for, score_for};
pub use shapes::{base_shape, color_of, definition, Shape, ShapeDef};
pub use snapshot::GameSnapshot;
