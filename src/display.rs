//! Rendering layer — all terminal I/O lives here.
//!
//! World pixels are projected through the camera onto character cells.  The
//! simulation hands over draw commands via [`RenderSink`]; this module only
//! turns them into terminal commands.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use glam::Vec2;
use pursuit_arena::compute::camera::Camera;
use pursuit_arena::compute::GameState;
use pursuit_arena::config::DisplayConfig;
use pursuit_arena::entities::SpriteId;
use pursuit_arena::render::{draw_world, DrawCommand, RenderSink};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_WORLD_EDGE: Color = Color::DarkGrey;
const C_HUD: Color = Color::Yellow;
const C_AVATAR: Color = Color::White;
const C_PROJECTILE: Color = Color::Cyan;
const C_PURSUER: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

/// First and last terminal rows of the play area (row 0 is the HUD, row 1
/// and `height - 2` are the border, the last row holds the hint).
fn play_rows(height: u16) -> (u16, u16) {
    (2, height.saturating_sub(3))
}

// ── Projection ────────────────────────────────────────────────────────────────

/// Maps world positions to terminal cells for one frame.
struct Viewport {
    camera: Camera,
    cell: Vec2,
    cols: u16,
    rows: u16,
    top: u16,
}

impl Viewport {
    fn new(camera: &Camera, display: &DisplayConfig, width: u16, height: u16) -> Self {
        let (top, bottom) = play_rows(height);
        Self {
            camera: camera.clone(),
            cell: Vec2::new(display.cell_width, display.cell_height),
            cols: width.saturating_sub(2),
            rows: bottom.saturating_sub(top) + 1,
            top,
        }
    }

    fn size_px(&self) -> Vec2 {
        Vec2::new(self.cols as f32, self.rows as f32) * self.cell
    }

    /// Terminal (column, row), or `None` when off screen.
    fn to_cell(&self, world: Vec2) -> Option<(u16, u16)> {
        let cell = (self.camera.world_to_view(world, self.size_px()) / self.cell).floor();
        if cell.x < 0.0 || cell.y < 0.0 || cell.x >= self.cols as f32 || cell.y >= self.rows as f32 {
            return None;
        }
        Some((cell.x as u16 + 1, cell.y as u16 + self.top))
    }
}

// ── Render sink ───────────────────────────────────────────────────────────────

/// Queues one glyph per draw command.  I/O errors are held until
/// [`TerminalSink::finish`] because `RenderSink::draw` cannot fail.
struct TerminalSink<'a, W: Write> {
    out: &'a mut W,
    viewport: Viewport,
    error: Option<io::Error>,
}

/// Glyph and colour for a sprite; odd animation frames alternate the glyph.
fn glyph(command: &DrawCommand) -> (char, Color) {
    let odd = command
        .source
        .map(|rect| rect.width > 0 && (rect.x / rect.width) % 2 == 1)
        .unwrap_or(false);
    match command.sprite.id {
        SpriteId::AVATAR_IDLE => ('@', C_AVATAR),
        SpriteId::AVATAR_WALK_UP => (if odd { '⇡' } else { '^' }, C_AVATAR),
        SpriteId::AVATAR_WALK_DOWN => (if odd { '⇣' } else { 'v' }, C_AVATAR),
        SpriteId::AVATAR_WALK_LEFT => (if odd { '⇠' } else { '<' }, C_AVATAR),
        SpriteId::AVATAR_WALK_RIGHT => (if odd { '⇢' } else { '>' }, C_AVATAR),
        SpriteId::PROJECTILE => ('•', C_PROJECTILE),
        SpriteId::PURSUER => (if odd { 'x' } else { 'X' }, C_PURSUER),
        _ => ('?', Color::Magenta),
    }
}

impl<W: Write> TerminalSink<'_, W> {
    fn put(&mut self, col: u16, row: u16, ch: char, color: Color) -> io::Result<()> {
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetForegroundColor(color))?;
        self.out.queue(Print(ch))?;
        Ok(())
    }

    fn finish(self) -> io::Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<W: Write> RenderSink for TerminalSink<'_, W> {
    fn draw(&mut self, command: DrawCommand) {
        if self.error.is_some() {
            return;
        }
        let size = match command.source {
            Some(rect) => Vec2::new(rect.width as f32, rect.height as f32),
            None => command.sprite.size(),
        };
        // One cell per sprite, placed at the sprite's centre.
        let Some((col, row)) = self.viewport.to_cell(command.position + size * command.scale / 2.0) else {
            return;
        };
        let (ch, color) = glyph(&command);
        if let Err(err) = self.put(col, row, ch, color) {
            self.error = Some(err);
        }
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState, display: &DisplayConfig, fps: f32) -> io::Result<()> {
    let (width, height) = terminal::size()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, width, height)?;
    let viewport = Viewport::new(&state.camera, display, width, height);
    draw_world_edges(out, &viewport, state.world_size)?;
    draw_hud(out, state, width, fps)?;

    let mut sink = TerminalSink { out: &mut *out, viewport, error: None };
    draw_world(state, &mut sink);
    sink.finish()?;

    draw_controls_hint(out, height)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, width: u16, height: u16) -> io::Result<()> {
    let w = width as usize;
    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..height.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }
    Ok(())
}

/// Shade every play cell whose centre lies outside the world rectangle.
fn draw_world_edges<W: Write>(out: &mut W, viewport: &Viewport, world: Vec2) -> io::Result<()> {
    let size_px = viewport.size_px();
    out.queue(style::SetForegroundColor(C_WORLD_EDGE))?;
    for r in 0..viewport.rows {
        for c in 0..viewport.cols {
            let centre_view = (Vec2::new(c as f32, r as f32) + 0.5) * viewport.cell;
            let world_point = (centre_view - size_px / 2.0) / viewport.camera.zoom + viewport.camera.focus;
            if world_point.x < 0.0 || world_point.y < 0.0 || world_point.x > world.x || world_point.y > world.y {
                out.queue(cursor::MoveTo(c + 1, r + viewport.top))?;
                out.queue(Print("░"))?;
            }
        }
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, width: u16, fps: f32) -> io::Result<()> {
    let avatar = &state.avatar;
    let pool = avatar.projectiles();
    let text = format!(
        "Pos {:>5.0},{:<5.0}  Cam {:>5.0},{:<5.0}  Shots {}/{}  Pursuers {}  {:>3.0} fps",
        avatar.position.x,
        avatar.position.y,
        state.camera.focus.x,
        state.camera.focus.y,
        pool.active_count(),
        pool.len(),
        state.pursuers.len(),
        fps,
    );
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(text.chars().take(width.saturating_sub(2) as usize).collect::<String>()))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("W A S D : Move   ← ↑ → ↓ : Aim   SPACE : Shoot   R : New wave   Q : Quit"))?;
    Ok(())
}
