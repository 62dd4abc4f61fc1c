//! Blockfall (workspace facade crate).
//!
//! Re-exports the engine and its collaborators under one roof
//! (`blockfall::{types,core,input,term}`) and hosts the pieces the terminal
//! binary is made of: configuration, logging, high-score persistence and the
//! session loop that drives the engine.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod app;
pub mod config;
pub mod highscore;
pub mod logging;
