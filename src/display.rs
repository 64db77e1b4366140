//! Rendering layer, all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! session state.  No game logic is performed; this module only scales world
//! coordinates onto the cell grid and translates state into terminal
//! commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use fireball_duel::compute::{enemy_sprite, player_sprite};
use fireball_duel::config::GameConfig;
use fireball_duel::entities::{EnemyKind, Projectile, SessionPhase, SessionState};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_GROUND: Color = Color::DarkGreen;
const C_HUD_FRAME: Color = Color::White;
const C_HP_FILL: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_IMP: Color = Color::Green;
const C_OGRE: Color = Color::DarkYellow;
const C_WARLOCK: Color = Color::DarkMagenta;
const C_SHOT_PLAYER: Color = Color::Cyan;
const C_SHOT_ENEMY: Color = Color::Magenta;
const C_HINT: Color = Color::DarkGrey;
const C_TITLE: Color = Color::Yellow;
const C_WIN: Color = Color::Green;
const C_LOSE: Color = Color::Red;

// ── Layout ────────────────────────────────────────────────────────────────────

/// First playfield row (row 0 is the HUD, row 1 the top border).
const PLAY_TOP: u16 = 2;
/// Interior width of an HP bar.  Both bars share the frame, so a freshly
/// fielded enemy starts three-quarters full.
const HP_BAR_CELLS: usize = 30;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame into a `cols` x `rows` terminal.
pub fn render<W: Write>(
    out: &mut W,
    state: &SessionState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, cols, rows)?;

    if state.phase == SessionPhase::Menu {
        draw_menu(out, cols, rows)?;
    } else {
        let cfg = &state.config;
        draw_ground(out, cfg, cols, rows)?;
        draw_hud(out, state, cols)?;

        draw_enemy(out, state, cols, rows)?;
        draw_player(out, state, cols, rows)?;

        for shot in &state.player.projectiles {
            draw_shot(out, cfg, cols, rows, shot, "»", C_SHOT_PLAYER)?;
        }
        for shot in &state.enemy.projectiles {
            draw_shot(out, cfg, cols, rows, shot, "«", C_SHOT_ENEMY)?;
        }

        match state.phase {
            SessionPhase::Won { .. } => draw_banner(out, cols, rows, "YOU  WIN!", C_WIN)?,
            SessionPhase::Lost { .. } => draw_banner(out, cols, rows, "GAME  OVER", C_LOSE)?,
            _ => {}
        }
    }

    draw_controls_hint(out, rows)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── World-to-cell scaling ─────────────────────────────────────────────────────

fn cell_x(x: f32, arena_w: f32, cols: u16) -> u16 {
    let right = cols.saturating_sub(1);
    let c = (x / arena_w * right as f32).round() as i32;
    c.clamp(0, right as i32) as u16
}

fn cell_y(y: f32, arena_h: f32, rows: u16) -> u16 {
    // Last playfield row; never above PLAY_TOP, even on a tiny terminal.
    let bottom = rows.saturating_sub(3).max(PLAY_TOP);
    let span = bottom.saturating_sub(PLAY_TOP) as f32;
    let r = (PLAY_TOP as f32 + y / arena_h * span).round() as i32;
    r.clamp(PLAY_TOP as i32, bottom as i32) as u16
}

// ── Border and ground ─────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, cols: u16, rows: u16) -> std::io::Result<()> {
    let w = cols as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Top bar on row 1
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Bottom bar on row rows-2
    out.queue(cursor::MoveTo(0, rows.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in PLAY_TOP..rows.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

/// Line one row below where grounded actors stand.
fn draw_ground<W: Write>(
    out: &mut W,
    cfg: &GameConfig,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let gy = cell_y(cfg.ground_y, cfg.arena_height, rows) + 1;
    if gy >= rows.saturating_sub(2) {
        return Ok(());
    }
    out.queue(cursor::MoveTo(1, gy))?;
    out.queue(style::SetForegroundColor(C_GROUND))?;
    out.queue(Print("═".repeat(cols.saturating_sub(2) as usize)))?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &SessionState, cols: u16) -> std::io::Result<()> {
    // Player bar on the left
    draw_hp_bar(out, 1, "You", state.player.hp)?;

    // Enemy bar right-aligned
    let label = kind_label(&state.enemy.kind);
    let total = label.chars().count() + 2 + HP_BAR_CELLS + 1;
    let rx = cols.saturating_sub(total as u16 + 1);
    draw_hp_bar(out, rx, label, state.enemy.hp)?;

    Ok(())
}

/// Fixed-width frame with a red fill of `hp * 1.5` world pixels, ten pixels
/// per cell.  Both sides share the frame width.
fn draw_hp_bar<W: Write>(out: &mut W, col: u16, label: &str, hp: i32) -> std::io::Result<()> {
    let fill = ((hp.max(0) as f32 * 1.5) / 10.0).round() as usize;
    let fill = fill.min(HP_BAR_CELLS);

    out.queue(cursor::MoveTo(col, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_FRAME))?;
    out.queue(Print(format!("{} [", label)))?;
    out.queue(style::SetForegroundColor(C_HP_FILL))?;
    out.queue(Print("█".repeat(fill)))?;
    out.queue(style::SetForegroundColor(C_HUD_FRAME))?;
    out.queue(Print(format!("{}]", " ".repeat(HP_BAR_CELLS - fill))))?;
    Ok(())
}

fn kind_label(kind: &EnemyKind) -> &'static str {
    match kind {
        EnemyKind::Imp => "Imp",
        EnemyKind::Ogre => "Ogre",
        EnemyKind::Warlock => "Warlock",
    }
}

// ── Sprites ───────────────────────────────────────────────────────────────────

/// Two-row, three-column glyph sprite for a sprite identifier, e.g. the idle
/// player:
///    ●      ← head
///   /█\     ← body + arms
fn sprite_rows(id: &str) -> [&'static str; 2] {
    match id {
        "player" => [" ● ", "/█\\"],
        "player_run" => [" ● ", "/█/"],
        "player_jump" => [" ● ", "╯█╰"],
        "player_attack" => [" ●─", "/█\\"],
        "player_dead" => ["   ", "▄▄▄"],
        "imp" => ["^ ^", "(▼)"],
        "imp_attack" => ["^ ^", "«▼»"],
        "imp_dead" => ["   ", "×▄×"],
        "ogre" => ["┌─┐", "▐█▌"],
        "ogre_attack" => ["┌─┐", "«█▌"],
        "ogre_dead" => ["   ", "▄█▄"],
        "warlock" => [" ▲ ", "(█)"],
        "warlock_attack" => ["«▲ ", "(█)"],
        "warlock_dead" => ["   ", "▄▲▄"],
        _ => ["   ", " ? "],
    }
}

fn enemy_color(kind: &EnemyKind) -> Color {
    match kind {
        EnemyKind::Imp => C_IMP,
        EnemyKind::Ogre => C_OGRE,
        EnemyKind::Warlock => C_WARLOCK,
    }
}

fn draw_player<W: Write>(
    out: &mut W,
    state: &SessionState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let cfg = &state.config;
    let cx = cell_x(state.player.x, cfg.arena_width, cols);
    let cy = cell_y(state.player.y, cfg.arena_height, rows);
    put_sprite(out, cx, cy, sprite_rows(player_sprite(&state.player)), C_PLAYER)
}

fn draw_enemy<W: Write>(
    out: &mut W,
    state: &SessionState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let cfg = &state.config;
    let cx = cell_x(state.enemy.x, cfg.arena_width, cols);
    let cy = cell_y(state.enemy.y, cfg.arena_height, rows);
    put_sprite(
        out,
        cx,
        cy,
        sprite_rows(enemy_sprite(&state.enemy)),
        enemy_color(&state.enemy.kind),
    )
}

/// Place a two-row sprite centered on a cell, feet on the bottom row.
fn put_sprite<W: Write>(
    out: &mut W,
    cx: u16,
    cy: u16,
    sprite: [&'static str; 2],
    color: Color,
) -> std::io::Result<()> {
    let lx = cx.saturating_sub(1).max(1);

    out.queue(style::SetForegroundColor(color))?;
    if cy > PLAY_TOP {
        out.queue(cursor::MoveTo(lx, cy - 1))?;
        out.queue(Print(sprite[0]))?;
    }
    out.queue(cursor::MoveTo(lx, cy))?;
    out.queue(Print(sprite[1]))?;
    Ok(())
}

fn draw_shot<W: Write>(
    out: &mut W,
    cfg: &GameConfig,
    cols: u16,
    rows: u16,
    shot: &Projectile,
    glyph: &str,
    color: Color,
) -> std::io::Result<()> {
    let cx = cell_x(shot.x, cfg.arena_width, cols).min(cols.saturating_sub(2)).max(1);
    let cy = cell_y(shot.y, cfg.arena_height, rows);
    out.queue(cursor::MoveTo(cx, cy))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   ↑ / W : Jump   SPACE : Fireball   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_menu<W: Write>(out: &mut W, cols: u16, rows: u16) -> std::io::Result<()> {
    draw_banner(out, cols, rows, "FIREBALL  DUEL", C_TITLE)?;

    let hint = "Press SPACE to start";
    let row = rows / 2 + 2;
    let col = (cols / 2).saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;
    Ok(())
}

/// Boxed message centered on the playfield.
fn draw_banner<W: Write>(
    out: &mut W,
    cols: u16,
    rows: u16,
    msg: &str,
    color: Color,
) -> std::io::Result<()> {
    let inner = msg.chars().count() + 6;
    let lines = [
        format!("╔{}╗", "═".repeat(inner)),
        format!("║   {}   ║", msg),
        format!("╚{}╝", "═".repeat(inner)),
    ];

    let cx = cols / 2;
    let start_row = (rows / 2).saturating_sub(1);
    out.queue(style::SetForegroundColor(color))?;
    for (i, line) in lines.iter().enumerate() {
        let col = cx.saturating_sub(line.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(line))?;
    }
    Ok(())
}
