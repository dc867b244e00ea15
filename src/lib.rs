//! Cosmic Corridor: a single-screen arcade space shooter.
//!
//! The game core (`geometry`, `entities`, `starfield`, `spawner`, `session`)
//! performs no I/O. `input` and `display` adapt it to a crossterm terminal.

pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod health;
pub mod input;
pub mod session;
pub mod spawner;
pub mod starfield;

/// Gameplay constants, in logical playfield units and seconds.
pub mod consts {
    /// Logical playfield size.
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;

    pub const MAX_LIVES: u32 = 3;

    // ── Player ───────────────────────────────────────────────────────────────
    pub const PLAYER_W: f32 = 40.0;
    pub const PLAYER_H: f32 = 22.0;
    pub const PLAYER_SPEED: f32 = 320.0;
    /// Distance kept between the ship's center and either side wall.
    pub const PLAYER_MARGIN: f32 = 40.0;
    pub const PLAYER_START_Y: f32 = HEIGHT - 70.0;
    pub const FIRE_COOLDOWN: f32 = 0.25;
    /// Refire multiplier while a power-up is active.
    pub const POWERED_COOLDOWN_FACTOR: f32 = 0.45;

    // ── Bullets ──────────────────────────────────────────────────────────────
    pub const BULLET_W: f32 = 4.0;
    pub const BULLET_H: f32 = 12.0;
    pub const BULLET_VY: f32 = -420.0;
    pub const BULLET_SPAWN_OFFSET_Y: f32 = 10.0;
    pub const DUAL_FIRE_OFFSET_X: f32 = 12.0;
    pub const BULLET_CULL_MARGIN: f32 = 20.0;

    // ── Enemies ──────────────────────────────────────────────────────────────
    pub const ENEMY_CULL_MARGIN: f32 = 40.0;
    pub const ENEMY_HIT_SCORE: u32 = 10;

    // ── Power-ups ────────────────────────────────────────────────────────────
    pub const POWERUP_SIZE: f32 = 18.0;
    pub const POWERUP_VY: f32 = 160.0;
    pub const POWERUP_DURATION: f32 = 6.0;
    pub const POWERUP_CULL_MARGIN: f32 = 20.0;

    // ── Session timers ───────────────────────────────────────────────────────
    pub const FLASH_DURATION: f32 = 0.25;
    pub const TUTORIAL_DURATION: f32 = 5.0;
    /// Passive score earned per second survived.
    pub const PASSIVE_SCORE_RATE: f32 = 4.0;

    /// Upper bound on a single frame's dt.
    pub const MAX_DT: f32 = 0.05;
}

/// Clamp a measured frame time into `[0, MAX_DT]` before it reaches the
/// session, so long stalls can't tunnel entities or flood the spawners.
pub fn clamp_dt(raw: f32) -> f32 {
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, consts::MAX_DT)
}
