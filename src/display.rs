/// Rendering layer: all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.  Playfield coordinates are offset by the
/// HUD row at the top.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use alien_invasion::entities::{GameState, GameStatus};
use alien_invasion::geometry::Rect;
use alien_invasion::settings::Settings;

/// Terminal rows above the playfield.
pub const HUD_ROWS: u16 = 1;
/// Terminal rows below the playfield.
pub const HINT_ROWS: u16 = 1;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_HIGH: Color = Color::White;
const C_HUD_LIVES: Color = Color::Red;
const C_SHIP: Color = Color::White;
const C_ALIEN: Color = Color::Green;
const C_BUTTON: Color = Color::Black;
const C_BUTTON_BG: Color = Color::Green;
const C_HINT: Color = Color::DarkGrey;

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb { r, g, b }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    settings: &Settings,
) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(rgb(settings.bg_color)))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, state, settings)?;
    draw_ship(out, state, settings)?;

    out.queue(style::SetForegroundColor(rgb(settings.bullet_color)))?;
    for bullet in &state.bullets {
        draw_rect(out, &bullet.rect, settings, '║')?;
    }

    out.queue(style::SetForegroundColor(C_ALIEN))?;
    for alien in &state.aliens {
        draw_alien(out, &alien.rect, settings)?;
    }

    if state.status() == GameStatus::GameOver {
        draw_button(out, state, settings)?;
    }
    draw_controls_hint(out, settings)?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── Coordinate mapping ────────────────────────────────────────────────────────

/// Terminal cell for a playfield point, or `None` when it falls outside.
fn to_cell(x: f32, y: f32, settings: &Settings) -> Option<(u16, u16)> {
    let col = x.round();
    let row = y.round();
    if col < 0.0 || row < 0.0 || col >= settings.screen_width || row >= settings.screen_height {
        return None;
    }
    Some((col as u16, row as u16 + HUD_ROWS))
}

/// Fill the cells covered by `rect` with `glyph`, clipped to the playfield.
fn draw_rect<W: Write>(
    out: &mut W,
    rect: &Rect,
    settings: &Settings,
    glyph: char,
) -> std::io::Result<()> {
    let w = rect.width.round().max(1.0) as usize;
    let h = rect.height.round().max(1.0) as usize;
    for dy in 0..h {
        for dx in 0..w {
            if let Some((col, row)) = to_cell(rect.x + dx as f32, rect.y + dy as f32, settings) {
                out.queue(cursor::MoveTo(col, row))?;
                out.queue(Print(glyph))?;
            }
        }
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(
    out: &mut W,
    state: &GameState,
    settings: &Settings,
) -> std::io::Result<()> {
    let width = settings.screen_width as u16;
    let sb = &state.scoreboard;

    // Ships left, left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&sb.ships_text))?;

    // High score, centre
    let high = format!("Hi {}", sb.high_score_text);
    let hx = (width / 2).saturating_sub(high.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(hx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_HIGH))?;
    out.queue(Print(&high))?;

    // Score and level, right
    let right = format!("{}  L{}", sb.score_text, sb.level_text);
    let rx = width.saturating_sub(right.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(&right))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_ship<W: Write>(
    out: &mut W,
    state: &GameState,
    settings: &Settings,
) -> std::io::Result<()> {
    let rect = &state.ship.rect;
    out.queue(style::SetForegroundColor(C_SHIP))?;

    // The classic sprite only fits the default 3x2 ship:
    //   ▲       ← tip
    //  /█\      ← fuselage + wings
    if rect.width.round() as u32 == 3 && rect.height.round() as u32 == 2 {
        if let Some((col, row)) = to_cell(rect.center_x() - 0.5, rect.y, settings) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print("▲"))?;
        }
        if let Some((col, row)) = to_cell(rect.x, rect.y + 1.0, settings) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print("/█\\"))?;
        }
        return Ok(());
    }
    draw_rect(out, rect, settings, '█')
}

fn draw_alien<W: Write>(out: &mut W, rect: &Rect, settings: &Settings) -> std::io::Result<()> {
    let w = rect.width.round().max(1.0) as usize;
    let body = if w >= 3 {
        format!("<{}>", "O".repeat(w - 2))
    } else {
        "O".repeat(w)
    };
    let h = rect.height.round().max(1.0) as usize;
    for dy in 0..h {
        if let Some((col, row)) = to_cell(rect.x, rect.y + dy as f32, settings) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print(&body))?;
        }
    }
    Ok(())
}

// ── Play button ───────────────────────────────────────────────────────────────

fn draw_button<W: Write>(
    out: &mut W,
    state: &GameState,
    settings: &Settings,
) -> std::io::Result<()> {
    let button = &state.play_button;
    let rect = &button.rect;
    let w = rect.width as usize;
    let h = rect.height as usize;

    out.queue(style::SetForegroundColor(C_BUTTON))?;
    out.queue(style::SetBackgroundColor(C_BUTTON_BG))?;
    for dy in 0..h {
        let Some((col, row)) = to_cell(rect.x, rect.y + dy as f32, settings) else {
            continue;
        };
        let line = if dy == h / 2 {
            let msg: String = button.msg.chars().take(w).collect();
            format!("{:^w$}", msg, w = w)
        } else {
            " ".repeat(w)
        };
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print(line))?;
    }
    out.queue(style::SetBackgroundColor(rgb(settings.bg_color)))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, settings: &Settings) -> std::io::Result<()> {
    let row = settings.screen_height as u16 + HUD_ROWS;
    out.queue(cursor::MoveTo(1, row))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(
        "←↑↓→ / WASD : Move   SPACE : Shoot   ENTER / click : Play   Q : Quit",
    ))?;
    Ok(())
}
