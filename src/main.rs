//! Terminal blockfall runner (default binary).
//!
//! crossterm for input, the framebuffer renderer for output, and a fixed
//! frame clock that feeds elapsed time into the session's gravity.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use blockfall::app::App;
use blockfall::config::Config;
use blockfall::core::{Engine, RandomSource};
use blockfall::highscore::HighScoreStore;
use blockfall::input::{handle_key_event, should_quit};
use blockfall::logging;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

const FRAME_MS: u64 = 16;

fn main() -> Result<()> {
    let config = Config::parse();
    logging::init(config.log_file.as_deref(), config.log_level)?;

    let high_scores = HighScoreStore::open(config.high_score_path());
    info!(
        seed = ?config.seed,
        best_score = high_scores.best(),
        "starting blockfall"
    );
    let mut app = App::new(Engine::new(config.random_source()), high_scores);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run<R: RandomSource>(term: &mut TerminalRenderer, app: &mut App<R>) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(FRAME_MS);
    let mut last_frame = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(app.snapshot(), &app.hud(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        // Auto-repeat only makes sense for steering.
                        if key.kind == KeyEventKind::Press || command.is_piece_control() {
                            app.handle(command);
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            app.advance(u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX));
        }
    }
}
