//! Time-driven spawning of enemies and power-ups, plus the difficulty curve.
//!
//! All randomness comes through the injected `rng` so a seeded generator
//! reproduces the exact same waves.

use log::debug;
use rand::Rng;

use crate::consts::WIDTH;
use crate::entities::{Enemy, PowerUp};

// ── Difficulty curve ──────────────────────────────────────────────────────────

const ENEMY_BASE_INTERVAL: f32 = 0.8;
const ENEMY_INTERVAL_DECAY: f32 = 0.01;
const ENEMY_MIN_INTERVAL: f32 = 0.35;
pub const POWERUP_INTERVAL: f32 = 8.0;

const ENEMY_BASE_SPEED: f32 = 120.0;
const ENEMY_SPEED_SPREAD: f32 = 50.0;
/// Extra downward speed per second survived.
const ENEMY_SPEED_PER_SECOND: f32 = 1.8;
const ENEMY_SINGLE_HP_CHANCE: f64 = 0.75;

const ENEMY_SPAWN_MARGIN: i32 = 60;
const POWERUP_SPAWN_MARGIN: i32 = 80;
const POWERUP_SPAWN_Y: f32 = -20.0;

/// Seconds between enemy spawns; shrinks with survival time down to a floor.
pub fn enemy_interval(time_survived: f32) -> f32 {
    (ENEMY_BASE_INTERVAL - time_survived * ENEMY_INTERVAL_DECAY).max(ENEMY_MIN_INTERVAL)
}

/// Lowest possible speed of an enemy spawned at `time_survived`.
pub fn enemy_min_speed(time_survived: f32) -> f32 {
    ENEMY_BASE_SPEED + ENEMY_SPEED_PER_SECOND * time_survived
}

/// Highest possible speed of an enemy spawned at `time_survived`.
pub fn enemy_max_speed(time_survived: f32) -> f32 {
    enemy_min_speed(time_survived) + ENEMY_SPEED_SPREAD
}

// ── Constructors ──────────────────────────────────────────────────────────────

/// A new enemy just above the top edge.
///
/// `speed = 120 + uniform(0, 50) + 1.8 * time_survived`; hp is 1 three times
/// out of four and 2 otherwise.
pub fn spawn_enemy(time_survived: f32, rng: &mut impl Rng) -> Enemy {
    let x = rng.gen_range(ENEMY_SPAWN_MARGIN..=WIDTH as i32 - ENEMY_SPAWN_MARGIN) as f32;
    let w = rng.gen_range(32..=46) as f32;
    let h = rng.gen_range(24..=32) as f32;
    let vy = ENEMY_BASE_SPEED
        + rng.gen_range(0.0..ENEMY_SPEED_SPREAD)
        + ENEMY_SPEED_PER_SECOND * time_survived;
    let hp = if rng.gen_bool(ENEMY_SINGLE_HP_CHANCE) { 1 } else { 2 };
    Enemy::new(x, -h, w, h, vy, hp)
}

pub fn spawn_powerup(rng: &mut impl Rng) -> PowerUp {
    let x = rng.gen_range(POWERUP_SPAWN_MARGIN..=WIDTH as i32 - POWERUP_SPAWN_MARGIN) as f32;
    PowerUp::new(x, POWERUP_SPAWN_Y)
}

// ── Accumulators ──────────────────────────────────────────────────────────────

/// Whatever the spawner produced this frame.
#[derive(Debug, Default)]
pub struct SpawnBatch {
    pub enemy: Option<Enemy>,
    pub powerup: Option<PowerUp>,
}

/// Elapsed-time accumulators for both spawn streams.
///
/// When an accumulator reaches its interval the interval is subtracted, not
/// zeroed, so overshoot carries into the next period.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spawner {
    pub enemy_clock: f32,
    pub powerup_clock: f32,
}

impl Spawner {
    pub fn new() -> Self {
        Spawner::default()
    }

    pub fn reset(&mut self) {
        *self = Spawner::default();
    }

    pub fn update(&mut self, dt: f32, time_survived: f32, rng: &mut impl Rng) -> SpawnBatch {
        let mut batch = SpawnBatch::default();

        self.enemy_clock += dt;
        self.powerup_clock += dt;

        let interval = enemy_interval(time_survived);
        if self.enemy_clock >= interval {
            self.enemy_clock -= interval;
            let enemy = spawn_enemy(time_survived, rng);
            debug!(
                "spawned enemy at x={} vy={:.1} hp={} (interval {:.2}s)",
                enemy.x, enemy.vy, enemy.hp, interval
            );
            batch.enemy = Some(enemy);
        }

        if self.powerup_clock >= POWERUP_INTERVAL {
            self.powerup_clock -= POWERUP_INTERVAL;
            let powerup = spawn_powerup(rng);
            debug!("spawned power-up at x={}", powerup.x);
            batch.powerup = Some(powerup);
        }

        batch
    }
}

