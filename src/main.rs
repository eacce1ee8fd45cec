//! Terminal falling-block runner (default binary).
//!
//! A blocking thread reads crossterm events and forwards them to a tokio
//! current-thread loop, which feeds elapsed frame time to the engine's gravity
//! scheduler, applies commands, and redraws through the framebuffer renderer.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;
use tokio::time::{interval, Instant, MissedTickBehavior};

use tui_blockfall::config::AppConfig;
use tui_blockfall::core::{GameState, SimpleRng};
use tui_blockfall::event_log::{EventLog, EventRecord};
use tui_blockfall::input::{handle_key_event, should_quit};
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::{Command, GamePhase};

const FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy)]
enum InputEvent {
    Command(Command),
    Resize,
    Quit,
}

struct Summary {
    score: u32,
    lines: u32,
    level: u32,
    pieces: u32,
    phase: GamePhase,
}

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = rt.block_on(run(&mut term, &config));

    // Always try to restore terminal state.
    let _ = term.exit();
    let summary = result?;

    println!(
        "[Game] seed {} finished: score {:06}, lines {:03}, level {:02}, {} pieces{}",
        config.seed,
        summary.score,
        summary.lines,
        summary.level,
        summary.pieces,
        if summary.phase == GamePhase::GameOver {
            " (game over)"
        } else {
            ""
        }
    );
    if let Some(path) = &config.log_path {
        println!("[Game] Event log appended to {}", path);
    }
    Ok(())
}

async fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<Summary> {
    let mut game = GameState::new(config.engine(), SimpleRng::new(config.seed))?;

    let log = match config.log_path.clone() {
        Some(path) => EventLog::open(path),
        None => EventLog::disabled(),
    };
    log.record(EventRecord::Start {
        seed: config.seed,
        rows: config.rows,
        columns: config.columns,
        start_level: config.start_level,
    });

    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<InputEvent>();
    spawn_input_thread(input_tx);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut frame = interval(FRAME);
    frame.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last = Instant::now();

    game.start();

    loop {
        tokio::select! {
            _ = frame.tick() => {
                // Whole milliseconds only; the remainder carries to the next frame.
                let elapsed_ms = last.elapsed().as_millis() as u32;
                last += Duration::from_millis(elapsed_ms as u64);
                game.advance(elapsed_ms);
            }
            input = input_rx.recv() => match input {
                Some(InputEvent::Command(command)) => {
                    game.apply_command(command);
                }
                Some(InputEvent::Resize) => term.invalidate(),
                Some(InputEvent::Quit) | None => break,
            },
        }

        if let Some(event) = game.take_last_event() {
            log.record(EventRecord::from(&event));
            if event.game_over {
                log.record(EventRecord::GameOver {
                    score: event.score,
                    lines: event.lines,
                    level: event.level,
                    pieces: game.stats().iter().sum(),
                });
            }
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 30));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
    }

    log.close().await;

    Ok(Summary {
        score: game.score(),
        lines: game.lines(),
        level: game.level(),
        pieces: game.stats().iter().sum(),
        phase: game.phase(),
    })
}

/// Forward key presses until quit or the receiver goes away.
fn spawn_input_thread(tx: mpsc::UnboundedSender<InputEvent>) {
    thread::spawn(move || loop {
        let input = match event::read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                if should_quit(key) {
                    InputEvent::Quit
                } else if let Some(command) = handle_key_event(key) {
                    InputEvent::Command(command)
                } else {
                    continue;
                }
            }
            Ok(Event::Resize(..)) => InputEvent::Resize,
            Ok(_) => continue,
            Err(_) => InputEvent::Quit,
        };
        let quit = matches!(input, InputEvent::Quit);
        if tx.send(input).is_err() || quit {
            break;
        }
    });
}
