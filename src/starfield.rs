//! Decorative falling starfield. Stars are recycled at the top rather than
//! destroyed, so the set never changes size.

use rand::Rng;

use crate::consts::{HEIGHT, WIDTH};

pub const STAR_COUNT: usize = 120;
const STAR_MIN_SPEED: f32 = 20.0;
const STAR_MAX_SPEED: f32 = 80.0;
const STAR_MIN_BRIGHTNESS: u8 = 150;
/// Recycled stars re-enter slightly above the visible area.
const STAR_RESPAWN_Y: f32 = -10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub brightness: u8,
}

#[derive(Clone, Debug)]
pub struct Starfield {
    pub stars: Vec<Star>,
}

impl Starfield {
    /// Scatter `STAR_COUNT` stars across the whole screen.
    pub fn new(rng: &mut impl Rng) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: rng.gen_range(0..=WIDTH as i32) as f32,
                y: rng.gen_range(0..=HEIGHT as i32) as f32,
                speed: rng.gen_range(STAR_MIN_SPEED..STAR_MAX_SPEED),
                brightness: rng.gen_range(STAR_MIN_BRIGHTNESS..=u8::MAX),
            })
            .collect();
        Starfield { stars }
    }

    /// Advance every star and send the ones that fell past the bottom back
    /// to the top with fresh speed and brightness.
    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) {
        for star in &mut self.stars {
            star.y += star.speed * dt;
            if star.y > HEIGHT {
                star.x = rng.gen_range(0..=WIDTH as i32) as f32;
                star.y = STAR_RESPAWN_Y;
                star.speed = rng.gen_range(STAR_MIN_SPEED..STAR_MAX_SPEED);
                star.brightness = rng.gen_range(STAR_MIN_BRIGHTNESS..=u8::MAX);
            }
        }
    }
}
