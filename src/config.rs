//! Command-line options and the validated runtime configuration.

use std::time::Duration;

use clap::Parser;

use crate::error::ConfigError;

pub const MIN_FPS: u32 = 10;
pub const MAX_FPS: u32 = 240;

/// How long a key counts as held after its last press/repeat event, for
/// terminals that never report key releases. OS key-repeat runs at >= 15 Hz,
/// so this is always refreshed while the key is down.
const HOLD_WINDOW_MS: u64 = 133;

#[derive(Parser, Debug, Clone)]
#[command(name = "cosmic_corridor")]
#[command(about = "Arcade space shooter for the terminal")]
pub struct Cli {
    /// Seed for enemy, power-up and starfield randomness (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Target frames per second
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Print the liveness status and exit
    #[arg(long)]
    pub health: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub fps: u32,
    /// Target wall-clock length of one frame.
    pub frame: Duration,
    /// `HOLD_WINDOW_MS` expressed in frames.
    pub hold_frames: u64,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        if !(MIN_FPS..=MAX_FPS).contains(&cli.fps) {
            return Err(ConfigError::FpsOutOfRange {
                got: cli.fps,
                min: MIN_FPS,
                max: MAX_FPS,
            });
        }

        let fps = u64::from(cli.fps);
        Ok(Config {
            seed: cli.seed,
            fps: cli.fps,
            frame: Duration::from_micros(1_000_000 / fps),
            hold_frames: (fps * HOLD_WINDOW_MS).div_ceil(1000),
        })
    }
}
