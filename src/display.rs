/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands, scaling the fixed playfield onto whatever
/// terminal size we have.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use flappy_care::care::{CareInventory, CareKind};
use flappy_care::entities::{
    Bird, Collectible, CollectibleKind, DeathCause, GameState, Obstacle, ObstacleKind, Phase, Rgb,
    Vital,
};
use flappy_care::vitals::{critical_needs, Mood, StatLevel};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_TIME: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;
const C_NEED: Color = Color::Red;

/// Rows reserved outside the playfield: HUD, top border, bottom border,
/// meters, inventory, controls hint.
const CHROME_ROWS: u16 = 6;

// ── Playfield → terminal mapping ──────────────────────────────────────────────

struct View {
    cols: u16,
    rows: u16,
    sx: f32,
    sy: f32,
}

impl View {
    fn new(state: &GameState) -> Self {
        let cfg = &state.config;
        let (w, h) = terminal::size().unwrap_or((80, 24));
        let cols = w.saturating_sub(2).max(1);
        let rows = h.saturating_sub(CHROME_ROWS).max(1);
        View {
            cols,
            rows,
            sx: cols as f32 / cfg.canvas_width,
            sy: rows as f32 / cfg.canvas_height,
        }
    }

    /// Terminal cell for a playfield point, or `None` if it is off screen.
    fn cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let col = (x * self.sx).floor();
        let row = (y * self.sy).floor();
        if col < 0.0 || row < 0.0 || col >= self.cols as f32 || row >= self.rows as f32 {
            return None;
        }
        Some((1 + col as u16, 2 + row as u16))
    }

    fn bottom(&self) -> u16 {
        2 + self.rows
    }
}

fn rgb(c: Rgb) -> Color {
    Color::Rgb { r: c.0, g: c.1, b: c.2 }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    inventory: &CareInventory,
) -> std::io::Result<()> {
    let view = View::new(state);
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, &view)?;
    draw_hud(out, state, &view)?;

    for obstacle in &state.obstacles {
        draw_obstacle(out, obstacle, state, &view)?;
    }
    for item in state.collectibles.iter().filter(|c| !c.collected) {
        draw_collectible(out, item, &view)?;
    }
    for p in &state.particles {
        if let Some((col, row)) = view.cell(p.x, p.y) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(style::SetForegroundColor(rgb(p.color)))?;
            out.queue(Print(if p.life > 0.5 { "*" } else { "·" }))?;
        }
    }

    draw_bird(out, &state.bird, state, &view)?;
    draw_meters(out, &state.bird, &view)?;
    draw_inventory(out, state, inventory, &view)?;
    draw_controls_hint(out, &view)?;

    match state.phase() {
        Phase::NotStarted => draw_banner(out, &view, &["KEEP IT ALIVE", "ENTER - Start"], Color::Cyan)?,
        Phase::Paused => draw_banner(out, &view, &["PAUSED", "P - Resume"], Color::Yellow)?,
        Phase::Ended => draw_game_over(out, state, &view)?,
        Phase::Running => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.bottom() + 3))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &View) -> std::io::Result<()> {
    let w = view.cols as usize;
    let bottom = view.bottom();

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;

    out.queue(cursor::MoveTo(0, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in 2..bottom {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols + 1, row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, view: &View) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>4}", state.score)))?;

    out.queue(style::SetForegroundColor(C_HUD_TIME))?;
    out.queue(Print(format!("  Time:{:>4}s", state.time_alive.floor() as u32)))?;

    if state.high_score > 0 {
        out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
        out.queue(Print(format!("  Best:{:>4}", state.high_score)))?;
    }

    // Mood — right
    let mood = Mood::of(&state.bird);
    let mood_str = format!("{}  Care:{}", mood.label(), state.care_actions);
    let rx = (view.cols + 1).saturating_sub(mood_str.chars().count() as u16);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(mood_color(mood)))?;
    out.queue(Print(&mood_str))?;

    Ok(())
}

fn mood_color(mood: Mood) -> Color {
    match mood {
        Mood::Ecstatic => Color::Green,
        Mood::Happy => Color::Blue,
        Mood::Okay => Color::Yellow,
        Mood::Sad => Color::DarkYellow,
        Mood::Miserable | Mood::Dead => Color::Red,
    }
}

fn level_color(value: f32) -> Color {
    match StatLevel::of(value) {
        StatLevel::Good => Color::Green,
        StatLevel::Fair => Color::Yellow,
        StatLevel::Low => Color::DarkYellow,
        StatLevel::Critical => Color::Red,
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn obstacle_color(kind: ObstacleKind) -> Color {
    match kind {
        ObstacleKind::Pipe => Color::Green,
        ObstacleKind::Pollution => Color::Grey,
        ObstacleKind::Storm => Color::Blue,
        ObstacleKind::Predator => Color::Red,
    }
}

fn draw_obstacle<W: Write>(
    out: &mut W,
    obstacle: &Obstacle,
    state: &GameState,
    view: &View,
) -> std::io::Result<()> {
    let cfg = &state.config;
    let gap_bottom = cfg.canvas_height - obstacle.bottom_height;
    let col_from = (obstacle.x * view.sx).floor().max(0.0) as u16;
    let col_to = ((obstacle.x + cfg.obstacle_width) * view.sx).ceil().min(view.cols as f32) as u16;
    let gap_top_row = (obstacle.top_height * view.sy).floor() as u16;
    let gap_bottom_row = (gap_bottom * view.sy).ceil() as u16;

    out.queue(style::SetForegroundColor(obstacle_color(obstacle.kind)))?;
    for col in col_from..col_to {
        for row in (0..gap_top_row.min(view.rows)).chain(gap_bottom_row.min(view.rows)..view.rows) {
            out.queue(cursor::MoveTo(1 + col, 2 + row))?;
            out.queue(Print("█"))?;
        }
    }
    Ok(())
}

/// Symbols:
///   o  (green)  — Food:     +hunger
///   +  (red)    — Medicine: +health
///   ϟ  (amber)  — Energy:   +energy
///   ♦  (purple) — Toy:      +happiness
fn draw_collectible<W: Write>(out: &mut W, item: &Collectible, view: &View) -> std::io::Result<()> {
    let Some((col, row)) = view.cell(item.x, item.y) else {
        return Ok(());
    };
    let symbol = match item.kind {
        CollectibleKind::Food => "o",
        CollectibleKind::Medicine => "+",
        CollectibleKind::Energy => "ϟ",
        CollectibleKind::Toy => "♦",
    };
    // Pulse between the base and glow colour.
    let color = if item.pulse_phase.sin() > 0.0 {
        item.kind.glow()
    } else {
        match item.kind {
            CollectibleKind::Food => Rgb::FOOD,
            CollectibleKind::Medicine => Rgb::MEDICINE,
            CollectibleKind::Energy => Rgb::ENERGY,
            CollectibleKind::Toy => Rgb::TOY,
        }
    };
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(rgb(color)))?;
    out.queue(Print(symbol))?;
    Ok(())
}

fn draw_bird<W: Write>(out: &mut W, bird: &Bird, state: &GameState, view: &View) -> std::io::Result<()> {
    let half = state.config.bird_size / 2.0;
    let Some((col, row)) = view.cell(bird.x + half, bird.y + half) else {
        return Ok(());
    };

    let (sprite, color) = if !bird.is_alive {
        ("x>", Color::DarkRed)
    } else {
        let sprite = if bird.wing_phase.sin() > 0.0 { "^>" } else { "v>" };
        let color = if bird.happiness > 70.0 {
            Color::Yellow
        } else if bird.happiness > 30.0 {
            Color::DarkYellow
        } else {
            Color::Red
        };
        (sprite, color)
    };
    out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(sprite))?;
    Ok(())
}

// ── Meters & inventory (below the playfield) ─────────────────────────────────

fn draw_meters<W: Write>(out: &mut W, bird: &Bird, view: &View) -> std::io::Result<()> {
    const BAR: usize = 10;
    out.queue(cursor::MoveTo(1, view.bottom() + 1))?;
    for vital in Vital::ALL {
        let value = bird.vital(vital);
        let filled = ((value / 100.0) * BAR as f32).round() as usize;
        out.queue(style::SetForegroundColor(C_HUD_TIME))?;
        out.queue(Print(format!("{} ", &vital.label()[..3])))?;
        out.queue(style::SetForegroundColor(level_color(value)))?;
        out.queue(Print(format!(
            "{}{} {:>3}  ",
            "■".repeat(filled.min(BAR)),
            "·".repeat(BAR - filled.min(BAR)),
            value.round() as u32
        )))?;
    }
    Ok(())
}

fn draw_inventory<W: Write>(
    out: &mut W,
    state: &GameState,
    inventory: &CareInventory,
    view: &View,
) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.bottom() + 2))?;
    for (i, kind) in CareKind::ALL.into_iter().enumerate() {
        let count = inventory.count(kind);
        let color = if count == 0 { C_HINT } else { rgb(kind.color()) };
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(format!("[{}] {} x{}  ", i + 1, kind.label(), count)))?;
    }

    out.queue(style::SetForegroundColor(C_NEED))?;
    for need in critical_needs(&state.bird) {
        out.queue(Print(format!(" {}", need.label())))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &View) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.bottom() + 3))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("SPACE/W : Flap   1-4 : Care   H : Pet   P : Pause   R : Restart   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_banner<W: Write>(out: &mut W, view: &View, lines: &[&str], color: Color) -> std::io::Result<()> {
    let cx = 1 + view.cols / 2;
    let start_row = 2 + (view.rows / 2).saturating_sub(lines.len() as u16 / 2);
    out.queue(style::SetForegroundColor(color))?;
    for (i, line) in lines.iter().enumerate() {
        let col = cx.saturating_sub(line.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(*line))?;
    }
    Ok(())
}

fn draw_game_over<W: Write>(out: &mut W, state: &GameState, view: &View) -> std::io::Result<()> {
    let cause = match state.death_cause {
        Some(DeathCause::Health) => "Your bird's health gave out",
        Some(DeathCause::Hunger) => "Your bird starved",
        Some(DeathCause::Energy) => "Your bird ran out of energy",
        Some(DeathCause::Happiness) => "Your bird died of sadness",
        Some(DeathCause::OutOfBounds) => "Your bird flew out of bounds",
        None => "Your bird is gone",
    };
    let score_line = format!("Final Score: {:>4}   Time: {}s", state.score, state.time_alive.floor() as u32);
    let best_line = if state.score >= state.high_score && state.score > 0 {
        format!("★ NEW BEST: {:>4} ★", state.high_score)
    } else {
        format!("Best Score: {:>4}", state.high_score)
    };

    let lines: [&str; 7] = [
        "╔════════════════════╗",
        "║    GAME  OVER      ║",
        "╚════════════════════╝",
        cause,
        &score_line,
        &best_line,
        "R - Play Again  Q - Quit",
    ];
    draw_banner(out, view, &lines, Color::Red)
}
