//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer for output.
//! Directional keys go through a trailing-edge debouncer before reaching the
//! engine, so key-repeat bursts resolve to a single move.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_2048::config::Config;
use tui_2048::core::GameState;
use tui_2048::input::{handle_key_event, should_quit, Debouncer};
use tui_2048::logging;
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(config.log_path.as_deref())?;

    let seed = config.resolve_seed();
    let game = GameState::new(config.board_size, seed).with_context(|| {
        format!(
            "starting a {0}x{0} game (TUI2048_SIZE)",
            config.board_size
        )
    })?;
    info!(board_size = config.board_size, seed, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let final_state = result?;
    info!(
        score = final_state.score(),
        moves = final_state.moves(),
        "exiting"
    );
    println!(
        "Score: {}  Best tile: {}  Moves: {}",
        final_state.score(),
        final_state.best_tile(),
        final_state.moves()
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut game: GameState, config: &Config) -> Result<GameState> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut debouncer = Debouncer::with_window_ms(config.debounce_ms);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(game);
                    }
                    match handle_key_event(key) {
                        Some(GameAction::Move(direction)) => debouncer.push(direction),
                        Some(GameAction::Restart) => {
                            debouncer.reset();
                            info!(score = game.score(), "restart");
                            game = game.restart();
                        }
                        None => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            if let Some(direction) = debouncer.update(elapsed.as_millis() as u32) {
                game = game.apply_move(direction);
            }
        }
    }
}
