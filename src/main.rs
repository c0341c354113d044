//! Terminal hue runner (default binary).
//!
//! Reads config from the environment and flags, restores today's save if
//! there is one, then runs a fixed-tick crossterm loop over a
//! framebuffer-based renderer.

use std::env;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_hue::app::{open_store, App, SystemClipboard};
use tui_hue::config::HueConfig;
use tui_hue::core::{date_string, generate_daily_grid, today};
use tui_hue::engine::{grid_glyphs, share_text};
use tui_hue::input::{handle_key_event, should_quit};
use tui_hue::logging::init_tracing;
use tui_hue::term::{FrameBuffer, PuzzleView, TerminalRenderer, Viewport};
use tui_hue::types::TICK_MS;

fn main() -> Result<()> {
    let mut config = HueConfig::from_env();
    let args: Vec<String> = env::args().skip(1).collect();
    config.apply_args(&args)?;

    if config.print {
        print_puzzle(&config);
        return Ok(());
    }

    init_tracing(&config.log_path);

    let mut app = App::open(
        config.puzzle_date(),
        open_store(&config, today()),
        Box::new(SystemClipboard::default()),
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn print_puzzle(config: &HueConfig) {
    let date = config.puzzle_date();
    let grid = generate_daily_grid(date);
    println!("{}", date_string(date));
    println!("{}", grid_glyphs(&grid));
    println!();
    println!("share preview:");
    println!("{}", share_text(&grid, 0, date));
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let view = PuzzleView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&app.snapshot(), app.status(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        app.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.tick(TICK_MS);
        }
    }
}
