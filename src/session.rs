//! One playthrough's worth of game state and the per-frame update.
//!
//! The session performs no I/O. Randomness is injected on every call that
//! needs it, so a seeded generator replays a run exactly.

use log::info;
use rand::Rng;

use crate::consts::*;
use crate::entities::{Bullet, Enemy, FrameInput, GameStatus, Player, PowerUp};
use crate::geometry::overlaps;
use crate::spawner::Spawner;
use crate::starfield::Starfield;

#[derive(Clone, Debug)]
pub struct Session {
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub powerups: Vec<PowerUp>,
    pub starfield: Starfield,
    pub spawner: Spawner,
    /// Summed in f64 so long runs don't drift below the wall clock.
    pub time_survived: f64,
    pub score: u32,
    pub status: GameStatus,
    pub flash_timer: f32,
    pub tutorial_timer: f32,
    /// Passive points already credited for `time_survived`.
    pub passive_awarded: u32,
}

impl Session {
    pub fn new(rng: &mut impl Rng) -> Self {
        Session {
            player: Player::at_start(),
            bullets: Vec::new(),
            enemies: Vec::new(),
            powerups: Vec::new(),
            starfield: Starfield::new(rng),
            spawner: Spawner::new(),
            time_survived: 0.0,
            score: 0,
            status: GameStatus::Playing,
            flash_timer: 0.0,
            tutorial_timer: TUTORIAL_DURATION,
            passive_awarded: 0,
        }
    }

    /// Start a fresh run. The starfield keeps its current positions.
    pub fn reset(&mut self) {
        self.player = Player::at_start();
        self.bullets.clear();
        self.enemies.clear();
        self.powerups.clear();
        self.spawner.reset();
        self.time_survived = 0.0;
        self.score = 0;
        self.status = GameStatus::Playing;
        self.flash_timer = 0.0;
        self.tutorial_timer = TUTORIAL_DURATION;
        self.passive_awarded = 0;
    }

    // ── Read-only view for the render sink ───────────────────────────────────

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn lives(&self) -> u32 {
        self.player.lives
    }

    /// Damage flash strength in `[0, 1]`.
    pub fn flash_intensity(&self) -> f32 {
        (self.flash_timer / FLASH_DURATION).clamp(0.0, 1.0)
    }

    /// Remaining power-up window as a fraction of its full length.
    pub fn powerup_ratio(&self) -> f32 {
        (self.player.powerup_timer / POWERUP_DURATION).clamp(0.0, 1.0)
    }

    pub fn show_tutorial(&self) -> bool {
        self.tutorial_timer > 0.0 && !self.is_game_over()
    }

    // ── Per-frame update ─────────────────────────────────────────────────────

    /// Advance the game by `dt` seconds. `dt` is expected to be clamped by
    /// the caller (see `crate::clamp_dt`).
    ///
    /// While the game is over nothing moves; a `restart` input starts a new
    /// run instead.
    pub fn update(&mut self, input: &FrameInput, dt: f32, rng: &mut impl Rng) {
        if self.is_game_over() {
            if input.restart {
                info!("restarting after game over (final score {})", self.score);
                self.reset();
            }
            return;
        }

        // ── 1. Clocks ────────────────────────────────────────────────────────
        self.time_survived += f64::from(dt);
        self.tutorial_timer = (self.tutorial_timer - dt).max(0.0);

        // ── 2. Player movement and firing ────────────────────────────────────
        self.player.update(dt, input);
        if input.fire && self.player.can_fire() {
            self.fire();
        }

        // ── 3. Starfield ─────────────────────────────────────────────────────
        self.starfield.update(dt, rng);

        // ── 4. Spawning ──────────────────────────────────────────────────────
        let batch = self.spawner.update(dt, self.time_survived as f32, rng);
        self.enemies.extend(batch.enemy);
        self.powerups.extend(batch.powerup);

        // ── 5. Movement ──────────────────────────────────────────────────────
        for bullet in &mut self.bullets {
            bullet.update(dt);
        }
        for enemy in &mut self.enemies {
            enemy.update(dt);
        }
        for powerup in &mut self.powerups {
            powerup.update(dt);
        }

        // ── 6. Cull whatever left the screen ─────────────────────────────────
        self.bullets.retain(|b| !b.is_offscreen());
        self.enemies.retain(|e| !e.is_offscreen());
        self.powerups.retain(|p| !p.is_offscreen());

        // ── 7–9. Collisions ──────────────────────────────────────────────────
        self.resolve_bullet_hits();
        self.resolve_player_hits();
        self.resolve_pickups();

        // ── 10. Passive score ────────────────────────────────────────────────
        let earned = (self.time_survived * f64::from(PASSIVE_SCORE_RATE)).floor() as u32;
        if earned > self.passive_awarded {
            self.score += earned - self.passive_awarded;
            self.passive_awarded = earned;
        }

        // ── 11. Flash decay ──────────────────────────────────────────────────
        self.flash_timer = (self.flash_timer - dt).max(0.0);
    }

    /// One bullet from the nose, or a symmetric pair while powered.
    fn fire(&mut self) {
        self.player.reset_fire();
        let y = self.player.y - BULLET_SPAWN_OFFSET_Y;
        if self.player.has_powerup() {
            self.bullets.push(Bullet::new(self.player.x - DUAL_FIRE_OFFSET_X, y));
            self.bullets.push(Bullet::new(self.player.x + DUAL_FIRE_OFFSET_X, y));
        } else {
            self.bullets.push(Bullet::new(self.player.x, y));
        }
    }

    /// Each bullet damages at most the first live enemy it overlaps and is
    /// consumed by the hit. Enemies at 0 hp are removed afterwards.
    ///
    /// An enemy killed earlier in the same pass is skipped, so a second bullet
    /// on it flies on instead of being consumed for another 10 points.
    fn resolve_bullet_hits(&mut self) {
        let enemies = &mut self.enemies;
        let mut score_gain = 0;

        self.bullets.retain(|bullet| {
            let rect = bullet.rect();
            match enemies
                .iter_mut()
                .find(|e| !e.is_dead() && overlaps(&e.rect(), &rect))
            {
                Some(enemy) => {
                    enemy.take_damage(1);
                    score_gain += ENEMY_HIT_SCORE;
                    false
                }
                None => true,
            }
        });

        self.score += score_gain;
        self.enemies.retain(|e| !e.is_dead());
    }

    /// Every enemy touching the ship is removed and costs one life. Once the
    /// last life is gone, further overlaps that frame only remove the enemy.
    fn resolve_player_hits(&mut self) {
        let player_rect = self.player.rect();
        let before = self.enemies.len();
        self.enemies.retain(|e| !overlaps(&player_rect, &e.rect()));
        let hits = before - self.enemies.len();

        for _ in 0..hits {
            if self.is_game_over() {
                break;
            }
            self.player.lives = self.player.lives.saturating_sub(1);
            self.flash_timer = FLASH_DURATION;
            info!("ship hit, {} lives left", self.player.lives);
            if self.player.lives == 0 {
                self.status = GameStatus::GameOver;
                info!(
                    "game over: score {} after {:.1}s",
                    self.score, self.time_survived
                );
            }
        }
    }

    /// Picking up a power-up refreshes the window to its full length.
    fn resolve_pickups(&mut self) {
        let player_rect = self.player.rect();
        let before = self.powerups.len();
        self.powerups.retain(|p| !overlaps(&player_rect, &p.rect()));
        if self.powerups.len() < before {
            self.player.powerup_timer = POWERUP_DURATION;
        }
    }
}
