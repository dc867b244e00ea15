use cosmic_corridor::display::{power_bar, render, Viewport};
use cosmic_corridor::entities::{Bullet, Enemy, FrameInput, PowerUp};
use cosmic_corridor::health;
use cosmic_corridor::session::Session;
use cosmic_corridor::{clamp_dt, consts::MAX_DT};

use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn viewport_maps_corners_inside_the_border() {
    let view = Viewport::new(82, 24);
    assert_eq!(view.to_cell(0.0, 0.0), Some((1, 2)));
    assert_eq!(view.to_cell(799.9, 599.9), Some((80, 21)));
    assert_eq!(view.to_cell(400.0, 300.0), Some((41, 12)));
}

#[test]
fn viewport_skips_points_off_the_field() {
    let view = Viewport::new(82, 24);
    assert_eq!(view.to_cell(-1.0, 10.0), None);
    assert_eq!(view.to_cell(10.0, -20.0), None);
    assert_eq!(view.to_cell(800.0, 10.0), None);
    assert_eq!(Viewport::new(2, 3).to_cell(10.0, 10.0), None);
}

#[test]
fn power_bar_fills_proportionally() {
    assert_eq!(power_bar(1.0), "[##############]");
    assert_eq!(power_bar(0.0), "[..............]");
    assert_eq!(power_bar(0.5), "[#######.......]");
    assert_eq!(power_bar(3.0), power_bar(1.0));
}

#[test]
fn render_draws_hud_and_entities() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut session = Session::new(&mut rng);
    session.score = 1234;
    session.bullets.push(Bullet::new(100.0, 100.0));
    session.enemies.push(Enemy::new(300.0, 200.0, 40.0, 30.0, 0.0, 2));
    session.powerups.push(PowerUp::new(500.0, 200.0));
    session.player.powerup_timer = 3.0;

    let mut out: Vec<u8> = Vec::new();
    render(&mut out, &session, Viewport::new(100, 30), 0).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Score:    1234"));
    assert!(text.contains("Lives: ♥♥♥"));
    assert!(text.contains("POWER [#######.......]"));
    assert!(text.contains("(◉)"));
    assert!(text.contains("◆"));
    assert!(text.contains("║"));
    assert!(text.contains("/▲\\"));
    assert!(!text.contains("GAME  OVER"));
}

#[test]
fn render_shows_game_over_overlay() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut session = Session::new(&mut rng);
    session.player.lives = 1;
    session.enemies.push(Enemy::new(
        session.player.x,
        session.player.y,
        40.0,
        30.0,
        0.0,
        1,
    ));
    session.update(&FrameInput::default(), 0.0, &mut rng);
    assert!(session.is_game_over());

    let mut out: Vec<u8> = Vec::new();
    render(&mut out, &session, Viewport::new(100, 30), 300).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("GAME  OVER"));
    assert!(text.contains("Best this session: 300"));
    assert!(text.contains("ENTER - Play Again"));
}

#[test]
fn dt_is_clamped_before_update() {
    assert_eq!(clamp_dt(0.016), 0.016);
    assert_eq!(clamp_dt(2.0), MAX_DT);
    assert_eq!(clamp_dt(-0.5), 0.0);
    assert_eq!(clamp_dt(f32::NAN), 0.0);
}

#[test]
fn health_probe_reports_ok() {
    assert_eq!(health::status(), "ok");
    assert_eq!(health::status_json(), r#"{"status":"ok"}"#);
}
