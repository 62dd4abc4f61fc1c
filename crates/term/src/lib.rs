//! Terminal rendering module.
//!
//! Renders engine snapshots into a framebuffer of styled characters and
//! flushes it to a terminal with crossterm. The view is pure and testable;
//! only [`TerminalRenderer`] touches stdout.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Hud, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
