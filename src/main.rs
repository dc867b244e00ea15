use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use cosmic_corridor::clamp_dt;
use cosmic_corridor::config::{Cli, Config};
use cosmic_corridor::display::{self, Viewport};
use cosmic_corridor::error::GameError;
use cosmic_corridor::health;
use cosmic_corridor::input::InputTracker;
use cosmic_corridor::session::Session;

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits. Input is sampled once per frame, the measured
/// frame time is clamped, then the session is updated and drawn.
fn game_loop<W: Write>(
    out: &mut W,
    config: &Config,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
) -> Result<(), GameError> {
    let mut session = Session::new(rng);
    let mut tracker = InputTracker::new(config.hold_frames);
    let mut best_score: u32 = 0;
    let mut frame: u64 = 0;
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            if let Event::Key(key) = ev {
                tracker.handle(&key, frame);
            }
        }
        let input = tracker.snapshot(frame);
        if input.quit {
            info!("quit requested at frame {frame}");
            return Ok(());
        }

        let dt = clamp_dt(last.elapsed().as_secs_f32());
        last = Instant::now();

        let was_over = session.is_game_over();
        session.update(&input, dt, rng);
        if !was_over && session.is_game_over() {
            best_score = best_score.max(session.score);
        }

        let (width, height) = terminal::size()?;
        display::render(out, &session, Viewport::new(width, height), best_score)?;

        let elapsed = frame_start.elapsed();
        if elapsed < config.frame {
            thread::sleep(config.frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    let cli = Cli::parse();

    if cli.health {
        println!("{}", health::status_json());
        return Ok(());
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_cli(&cli)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!("starting at {} fps (seed {:?})", config.fps, config.seed);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    if !keyboard_enhanced {
        warn!("terminal does not report key releases; using hold window");
    }

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &config, &mut rng, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
