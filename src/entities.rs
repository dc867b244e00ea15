//! Game entity types: plain state plus their own per-frame update rules.
//!
//! Entities never look at each other or at the session; collisions and
//! scoring are resolved in `session`.

use crate::consts::*;
use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Input sampled once per frame by the front-end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    /// Start a new run; only honoured while the game is over.
    pub restart: bool,
    /// Handled by the front-end; the session ignores it.
    pub quit: bool,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub speed: f32,
    pub fire_cooldown: f32,
    /// Counts down; the next shot is allowed once it is <= 0.
    pub fire_timer: f32,
    /// Counts down; > 0 means dual, faster fire is active.
    pub powerup_timer: f32,
    pub lives: u32,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Player {
            x,
            y,
            w: PLAYER_W,
            h: PLAYER_H,
            speed: PLAYER_SPEED,
            fire_cooldown: FIRE_COOLDOWN,
            fire_timer: 0.0,
            powerup_timer: 0.0,
            lives: MAX_LIVES,
        }
    }

    /// Bottom-centre starting pose with a full life pool.
    pub fn at_start() -> Self {
        Player::new(WIDTH / 2.0, PLAYER_START_Y)
    }

    pub fn rect(&self) -> Rect {
        Rect::centered(self.x, self.y, self.w, self.h)
    }

    /// Move from held input and count the fire / power-up timers down.
    pub fn update(&mut self, dt: f32, input: &FrameInput) {
        let mut dx = 0.0;
        if input.left {
            dx -= 1.0;
        }
        if input.right {
            dx += 1.0;
        }

        self.x += dx * self.speed * dt;
        self.x = self.x.clamp(PLAYER_MARGIN, WIDTH - PLAYER_MARGIN);

        if self.fire_timer > 0.0 {
            self.fire_timer -= dt;
        }
        if self.powerup_timer > 0.0 {
            self.powerup_timer -= dt;
        }
    }

    pub fn can_fire(&self) -> bool {
        self.fire_timer <= 0.0
    }

    pub fn reset_fire(&mut self) {
        self.fire_timer = if self.has_powerup() {
            self.fire_cooldown * POWERED_COOLDOWN_FACTOR
        } else {
            self.fire_cooldown
        };
    }

    pub fn has_powerup(&self) -> bool {
        self.powerup_timer > 0.0
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub vy: f32,
}

impl Bullet {
    pub fn new(x: f32, y: f32) -> Self {
        Bullet { x, y, vy: BULLET_VY }
    }

    pub fn rect(&self) -> Rect {
        Rect::centered(self.x, self.y, BULLET_W, BULLET_H)
    }

    pub fn update(&mut self, dt: f32) {
        self.y += self.vy * dt;
    }

    /// Past the top edge by more than the cull margin.
    pub fn is_offscreen(&self) -> bool {
        self.y + BULLET_H <= -BULLET_CULL_MARGIN
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub vy: f32,
    pub hp: i32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, w: f32, h: f32, vy: f32, hp: i32) -> Self {
        Enemy { x, y, w, h, vy, hp }
    }

    pub fn rect(&self) -> Rect {
        Rect::centered(self.x, self.y, self.w, self.h)
    }

    pub fn update(&mut self, dt: f32) {
        self.y += self.vy * dt;
    }

    /// Top edge is more than the cull margin below the screen.
    pub fn is_offscreen(&self) -> bool {
        self.y - self.h / 2.0 > HEIGHT + ENEMY_CULL_MARGIN
    }

    pub fn take_damage(&mut self, dmg: i32) {
        self.hp -= dmg;
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}

// ── Power-ups ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub vy: f32,
}

impl PowerUp {
    pub fn new(x: f32, y: f32) -> Self {
        PowerUp {
            x,
            y,
            size: POWERUP_SIZE,
            vy: POWERUP_VY,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::centered(self.x, self.y, self.size, self.size)
    }

    pub fn update(&mut self, dt: f32) {
        self.y += self.vy * dt;
    }

    pub fn is_offscreen(&self) -> bool {
        self.y - self.size >= HEIGHT + POWERUP_CULL_MARGIN
    }
}
