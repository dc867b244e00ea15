//! Rendering layer: all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! session.  No game logic is performed; this module only translates the
//! logical 800×600 playfield into terminal cells and commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::consts::{HEIGHT, WIDTH};
use crate::entities::{Bullet, Enemy, PowerUp};
use crate::session::Session;
use crate::starfield::Star;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_TIME: Color = Color::Grey;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_PLAYER_POWERED: Color = Color::Green;
const C_ENEMY: Color = Color::Magenta;
const C_ENEMY_ARMOURED: Color = Color::Red;
const C_BULLET: Color = Color::Cyan;
const C_POWERUP: Color = Color::Green;
const C_HINT: Color = Color::DarkGrey;
const C_TUTORIAL: Color = Color::Yellow;

const POWER_BAR_CELLS: usize = 14;

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Maps playfield coordinates onto the terminal cells inside the border.
///
/// Row 0 is the HUD, row 1 the top border, row `height-2` the bottom border
/// and the last row the controls hint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Viewport { width, height }
    }

    fn inner_cols(&self) -> u16 {
        self.width.saturating_sub(2)
    }

    fn inner_rows(&self) -> u16 {
        self.height.saturating_sub(4)
    }

    /// Terminal cell for a playfield point, or `None` when it falls outside
    /// the visible play area.
    pub fn to_cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if !(0.0..WIDTH).contains(&x) || !(0.0..HEIGHT).contains(&y) {
            return None;
        }
        let cols = self.inner_cols();
        let rows = self.inner_rows();
        if cols == 0 || rows == 0 {
            return None;
        }
        let col = 1 + (x / WIDTH * f32::from(cols)) as u16;
        let row = 2 + (y / HEIGHT * f32::from(rows)) as u16;
        Some((col.min(cols), row.min(rows + 1)))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    session: &Session,
    view: Viewport,
    best_score: u32,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for star in &session.starfield.stars {
        draw_star(out, star, view)?;
    }

    draw_border(out, session, view)?;
    draw_hud(out, session, view)?;

    for enemy in &session.enemies {
        draw_enemy(out, enemy, view)?;
    }
    for powerup in &session.powerups {
        draw_powerup(out, powerup, view)?;
    }
    for bullet in &session.bullets {
        draw_bullet(out, bullet, view)?;
    }

    draw_player(out, session, view)?;
    draw_controls_hint(out, view)?;

    if session.show_tutorial() {
        draw_tutorial(out, view)?;
    }
    if session.is_game_over() {
        draw_game_over(out, session, view, best_score)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Print `text` centred on column `cx`.
fn print_centered<W: Write>(
    out: &mut W,
    text: &str,
    cx: u16,
    row: u16,
    color: Color,
) -> std::io::Result<()> {
    let col = cx.saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

/// The border turns red while the damage flash is active.
fn border_color(flash: f32) -> Color {
    if flash > 0.5 {
        Color::Red
    } else if flash > 0.0 {
        Color::DarkRed
    } else {
        C_BORDER
    }
}

fn draw_border<W: Write>(out: &mut W, session: &Session, view: Viewport) -> std::io::Result<()> {
    let w = view.width as usize;
    let h = view.height;

    out.queue(style::SetForegroundColor(border_color(session.flash_intensity())))?;

    // Row 1: top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2: bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

/// `[######........]` filled in proportion to `ratio`.
pub fn power_bar(ratio: f32) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * POWER_BAR_CELLS as f32).round() as usize)
        .min(POWER_BAR_CELLS);
    format!(
        "[{}{}]",
        "#".repeat(filled),
        ".".repeat(POWER_BAR_CELLS - filled)
    )
}

fn draw_hud<W: Write>(out: &mut W, session: &Session, view: Viewport) -> std::io::Result<()> {
    // Score and survival time, left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>7}", session.score)))?;
    out.queue(style::SetForegroundColor(C_HUD_TIME))?;
    out.queue(Print(format!("  Time: {:>4}s", session.time_survived as u32)))?;

    // Power-up window, centre
    if session.player.has_powerup() {
        let bar = format!("POWER {}", power_bar(session.powerup_ratio()));
        print_centered(out, &bar, view.width / 2, 0, C_POWERUP)?;
    }

    // Lives, right
    let hearts: String = "♥".repeat(session.lives() as usize);
    let lives_text = format!("Lives: {}", hearts);
    let rx = view
        .width
        .saturating_sub(lives_text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_text))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_star<W: Write>(out: &mut W, star: &Star, view: Viewport) -> std::io::Result<()> {
    let Some((col, row)) = view.to_cell(star.x, star.y) else {
        return Ok(());
    };
    let (glyph, color) = match star.brightness {
        230..=u8::MAX => ("*", Color::White),
        190..=229 => ("·", Color::Grey),
        _ => (".", Color::DarkGrey),
    };
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, session: &Session, view: Viewport) -> std::io::Result<()> {
    // Sprite (1 row, 3 cols):  /▲\
    let p = &session.player;
    let Some((col, row)) = view.to_cell(p.x, p.y) else {
        return Ok(());
    };
    let color = if p.has_powerup() { C_PLAYER_POWERED } else { C_PLAYER };
    out.queue(style::SetForegroundColor(color))?;
    out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), row))?;
    out.queue(Print("/▲\\"))?;
    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, enemy: &Enemy, view: Viewport) -> std::io::Result<()> {
    let Some((col, row)) = view.to_cell(enemy.x, enemy.y) else {
        return Ok(());
    };
    // Two-hit enemies get the armoured sprite.
    let (sprite, color) = if enemy.hp >= 2 {
        ("(◉)", C_ENEMY_ARMOURED)
    } else {
        ("<▼>", C_ENEMY)
    };
    out.queue(style::SetForegroundColor(color))?;
    out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), row))?;
    out.queue(Print(sprite))?;
    Ok(())
}

fn draw_powerup<W: Write>(out: &mut W, powerup: &PowerUp, view: Viewport) -> std::io::Result<()> {
    let Some((col, row)) = view.to_cell(powerup.x, powerup.y) else {
        return Ok(());
    };
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_POWERUP))?;
    out.queue(Print("◆"))?;
    Ok(())
}

fn draw_bullet<W: Write>(out: &mut W, bullet: &Bullet, view: Viewport) -> std::io::Result<()> {
    let Some((col, row)) = view.to_cell(bullet.x, bullet.y) else {
        return Ok(());
    };
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_BULLET))?;
    out.queue(Print("║"))?;
    Ok(())
}

// ── Hints ─────────────────────────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

fn draw_tutorial<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    let cx = view.width / 2;
    let row = view.height / 3;
    print_centered(
        out,
        "Shoot the falling ships, don't let them ram you",
        cx,
        row,
        C_TUTORIAL,
    )?;
    print_centered(out, "Grab ◆ for dual rapid fire", cx, row + 1, C_POWERUP)?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    session: &Session,
    view: Viewport,
    best_score: u32,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", session.score);
    let best_line = format!("Best this session: {}", best_score.max(session.score));
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (&score_line, Color::Yellow),
        (&best_line, Color::DarkYellow),
        ("ENTER - Play Again  Q - Quit", Color::White),
    ];

    let cx = view.width / 2;
    let start_row = (view.height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        print_centered(out, msg, cx, start_row + i as u16, *color)?;
    }

    Ok(())
}
