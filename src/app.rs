//! Session: one engine, its gravity clock and the side effects of its events.
//!
//! Terminal-free so the whole host behaviour can be driven from tests with a
//! scripted piece sequence and fake elapsed time.

use tracing::{info, warn};

use crate::core::{gravity_interval_ms, Engine, GameSnapshot, RandomSource, Transition};
use crate::highscore::HighScoreStore;
use crate::input::admit;
use crate::term::Hud;
use crate::types::{Command, EngineEvent};

/// How long a toast stays on screen.
pub const TOAST_MS: u32 = 1_500;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Toast {
    text: String,
    remaining_ms: u32,
}

pub struct App<R: RandomSource> {
    engine: Engine<R>,
    high_scores: HighScoreStore,
    snapshot: GameSnapshot,
    toast: Option<Toast>,
    gravity_elapsed_ms: u32,
}

impl<R: RandomSource> App<R> {
    pub fn new(engine: Engine<R>, high_scores: HighScoreStore) -> Self {
        let snapshot = engine.snapshot();
        Self {
            engine,
            high_scores,
            snapshot,
            toast: None,
            gravity_elapsed_ms: 0,
        }
    }

    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    pub fn high_score(&self) -> u32 {
        self.high_scores.best()
    }

    pub fn toast(&self) -> Option<&str> {
        self.toast.as_ref().map(|toast| toast.text.as_str())
    }

    /// Values for the side panel.
    pub fn hud(&self) -> Hud<'_> {
        Hud {
            high_score: self.high_scores.best(),
            message: self.toast(),
        }
    }

    /// Forward an input command. Piece control is dropped unless the game is
    /// running and unpaused.
    pub fn handle(&mut self, command: Command) {
        if !admit(command, &self.snapshot) {
            return;
        }
        if command == Command::Start {
            self.gravity_elapsed_ms = 0;
            self.toast = None;
        }
        let step = self.engine.apply(command);
        self.absorb(step);
    }

    /// Advance the clock by `elapsed_ms`, ticking the engine once per
    /// elapsed gravity interval.
    pub fn advance(&mut self, elapsed_ms: u32) {
        if let Some(toast) = &mut self.toast {
            toast.remaining_ms = toast.remaining_ms.saturating_sub(elapsed_ms);
            if toast.remaining_ms == 0 {
                self.toast = None;
            }
        }

        if !self.snapshot.playable() {
            self.gravity_elapsed_ms = 0;
            return;
        }

        self.gravity_elapsed_ms = self.gravity_elapsed_ms.saturating_add(elapsed_ms);
        loop {
            // Level can change mid-loop, so the interval is re-read each step.
            let interval = gravity_interval_ms(self.snapshot.level);
            if self.gravity_elapsed_ms < interval {
                break;
            }
            self.gravity_elapsed_ms -= interval;

            let step = self.engine.tick();
            self.absorb(step);
            if !self.snapshot.playable() {
                self.gravity_elapsed_ms = 0;
                break;
            }
        }
    }

    fn absorb(&mut self, step: Transition) {
        self.snapshot = step.snapshot;
        for event in step.events {
            match event {
                EngineEvent::LinesCleared { count, points } => {
                    self.show(format!("{} +{points}", clear_name(count)));
                }
                EngineEvent::LevelUp { level } => {
                    self.show(format!("Level {level}"));
                }
                EngineEvent::GameOver { final_score } => {
                    info!(final_score, lines = self.snapshot.lines, "game over");
                    let text = match self.high_scores.record(final_score) {
                        Ok(true) => format!("New best {final_score}!"),
                        Ok(false) => "Game over".to_string(),
                        Err(err) => {
                            warn!(error = %err, "could not save high score");
                            "Game over".to_string()
                        }
                    };
                    self.show(text);
                }
            }
        }
    }

    fn show(&mut self, text: String) {
        self.toast = Some(Toast {
            text,
            remaining_ms: TOAST_MS,
        });
    }
}

fn clear_name(count: u32) -> &'static str {
    match count {
        1 => "Single",
        2 => "Double",
        3 => "Triple",
        _ => "Quad",
    }
}
