use cosmic_corridor::consts::*;
use cosmic_corridor::entities::*;

fn idle() -> FrameInput {
    FrameInput::default()
}

// ── Player ────────────────────────────────────────────────────────────────────

#[test]
fn player_moves_right() {
    let mut player = Player::new(100.0, 100.0);
    player.update(0.0, &idle());
    assert_eq!(player.x, 100.0);

    let input = FrameInput { right: true, ..idle() };
    player.update(0.5, &input);
    assert!(player.x > 100.0);
}

#[test]
fn opposing_keys_cancel_out() {
    let mut player = Player::at_start();
    let input = FrameInput { left: true, right: true, ..idle() };
    player.update(0.5, &input);
    assert_eq!(player.x, WIDTH / 2.0);
}

#[test]
fn player_is_clamped_to_walls() {
    let mut player = Player::new(60.0, 100.0);
    player.update(1.0, &FrameInput { left: true, ..idle() });
    assert_eq!(player.x, 40.0);

    let mut player = Player::new(WIDTH - 60.0, 100.0);
    player.update(1.0, &FrameInput { right: true, ..idle() });
    assert_eq!(player.x, WIDTH - 40.0);
}

#[test]
fn reset_fire_uses_shorter_cooldown_while_powered() {
    let mut player = Player::at_start();
    assert!(player.can_fire());

    player.reset_fire();
    assert_eq!(player.fire_timer, FIRE_COOLDOWN);
    assert!(!player.can_fire());

    player.powerup_timer = 2.0;
    player.reset_fire();
    assert_eq!(player.fire_timer, FIRE_COOLDOWN * 0.45);
}

#[test]
fn timers_count_down_with_update() {
    let mut player = Player::at_start();
    player.fire_timer = 0.2;
    player.powerup_timer = 0.1;

    player.update(0.3, &idle());

    assert!(player.can_fire());
    assert!(!player.has_powerup());
}

#[test]
fn player_rect_is_centred() {
    let player = Player::new(100.0, 200.0);
    let r = player.rect();
    assert_eq!(r.left, 80.0);
    assert_eq!(r.top, 189.0);
    assert_eq!(r.right(), 120.0);
    assert_eq!(r.bottom(), 211.0);
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[test]
fn bullet_moves_up() {
    let mut bullet = Bullet::new(50.0, 50.0);
    let y_start = bullet.y;
    bullet.update(0.5);
    assert!(bullet.y < y_start);
}

#[test]
fn bullet_offscreen_above_margin() {
    assert!(!Bullet::new(10.0, 0.0).is_offscreen());
    assert!(!Bullet::new(10.0, -31.0).is_offscreen());
    assert!(Bullet::new(10.0, -32.0).is_offscreen());
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[test]
fn enemy_moves_down() {
    let mut enemy = Enemy::new(100.0, 10.0, 40.0, 20.0, 100.0, 1);
    enemy.update(0.1);
    assert!(enemy.y > 10.0);
}

#[test]
fn enemy_offscreen() {
    let enemy = Enemy::new(100.0, 700.0, 40.0, 20.0, 100.0, 1);
    assert!(enemy.is_offscreen());
}

#[test]
fn enemy_offscreen_only_past_margin() {
    // Top edge exactly at HEIGHT + 40 is still on the field.
    let edge = Enemy::new(100.0, HEIGHT + 40.0 + 10.0, 40.0, 20.0, 100.0, 1);
    assert!(!edge.is_offscreen());
    let past = Enemy::new(100.0, HEIGHT + 40.0 + 10.5, 40.0, 20.0, 100.0, 1);
    assert!(past.is_offscreen());
}

#[test]
fn enemy_dies_at_zero_hp() {
    let mut enemy = Enemy::new(100.0, 100.0, 40.0, 20.0, 100.0, 2);
    enemy.take_damage(1);
    assert!(!enemy.is_dead());
    enemy.take_damage(1);
    assert!(enemy.is_dead());
}

// ── Power-up ──────────────────────────────────────────────────────────────────

#[test]
fn powerup_falls_and_leaves() {
    let mut p = PowerUp::new(100.0, 0.0);
    p.update(1.0);
    assert_eq!(p.y, 160.0);
    assert!(!p.is_offscreen());

    let gone = PowerUp::new(100.0, HEIGHT + 38.0);
    assert!(gone.is_offscreen());
}

#[test]
fn status_and_input_are_plain_values() {
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
    let input = FrameInput { fire: true, ..idle() };
    let copy = input;
    assert_eq!(copy, input);
    assert!(!FrameInput::default().quit);
}
