//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure, no I/O. Board row 0 is the bottom row, so it lands on the last
//! screen line inside the frame.

use crate::core::{ActiveSnapshot, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, RunState, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Screen placement of the board frame for one render
#[derive(Debug, Clone, Copy)]
struct Layout {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Terminal renderer for the board, the falling piece and a status panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let layout = Layout {
            x: viewport.width.saturating_sub(w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
        };

        let border = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);
        self.draw_border(fb, layout, border);

        let empty = CellStyle::plain(Rgb::new(90, 90, 100), BOARD_BG).dim();
        for row in 0..BOARD_HEIGHT as i32 {
            for col in 0..BOARD_WIDTH as i32 {
                self.fill_cell(fb, layout, row, col, '·', empty);
            }
        }

        if let Some(active) = &snap.active {
            self.draw_backdrop(fb, layout, snap, active);
        }

        for cell in &snap.locked {
            let style = CellStyle::plain(color_rgb(cell.color), BOARD_BG).bold();
            self.fill_cell(fb, layout, cell.row, cell.col, '█', style);
        }

        if let Some(active) = &snap.active {
            for cell in &active.cells {
                let style = CellStyle::plain(color_rgb(cell.color), BOARD_BG).bold();
                self.fill_cell(fb, layout, cell.row, cell.col, '█', style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, layout);

        match snap.state {
            RunState::Paused => self.draw_overlay_text(fb, layout, "PAUSED"),
            RunState::GameOver => self.draw_overlay_text(fb, layout, "GAME OVER!"),
            RunState::Idle | RunState::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, at: Layout, style: CellStyle) {
        let Layout { x, y, w, h } = at;
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Dim fill of the rotation box behind the active piece, on free cells.
    fn draw_backdrop(
        &self,
        fb: &mut FrameBuffer,
        at: Layout,
        snap: &GameSnapshot,
        active: &ActiveSnapshot,
    ) {
        let style = CellStyle::plain(Rgb::new(70, 70, 85), BOARD_BG).dim();
        let b = active.bounds;
        for row in b.bottom.max(0)..b.top.min(BOARD_HEIGHT as i32) {
            for col in b.left.max(0)..b.right.min(BOARD_WIDTH as i32) {
                if !snap.occupancy[row as usize][col as usize] {
                    self.fill_cell(fb, at, row, col, '░', style);
                }
            }
        }
    }

    /// Paint board cell `(row, col)`. Cells off the visible board are skipped.
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        at: Layout,
        row: i32,
        col: i32,
        ch: char,
        style: CellStyle,
    ) {
        if !(0..BOARD_HEIGHT as i32).contains(&row) || !(0..BOARD_WIDTH as i32).contains(&col) {
            return;
        }
        let screen_row = (BOARD_HEIGHT as i32 - 1 - row) as u16;
        let px = at.x + 1 + col as u16 * self.cell_w;
        let py = at.y + 1 + screen_row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        at: Layout,
    ) {
        let panel_x = at.x.saturating_add(at.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = at.y;
        fb.put_str(panel_x, y, "STATE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, state_label(snap.state), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.lines, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        let next = CellStyle::plain(color_rgb(snap.next.color()), PANEL_BG).bold();
        fb.put_str(panel_x, y, kind_letter(snap.next), next);
        y = y.saturating_add(2);

        let hint = value.dim();
        for line in ["p play", "s pause", "x stop", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, at: Layout, text: &str) {
        let mid_y = at.y.saturating_add(at.h / 2);
        let text_w = text.chars().count() as u16;
        let x = at.x.saturating_add(at.w.saturating_sub(text_w) / 2);
        let style = CellStyle::plain(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::LightBlue => Rgb::new(80, 220, 220),
        Color::Blue => Rgb::new(80, 120, 220),
        Color::Orange => Rgb::new(255, 165, 0),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Red => Rgb::new(220, 80, 80),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Purple => Rgb::new(200, 120, 220),
    }
}

fn state_label(state: RunState) -> &'static str {
    match state {
        RunState::Idle => "IDLE",
        RunState::Running => "RUNNING",
        RunState::Paused => "PAUSED",
        RunState::GameOver => "OVER",
    }
}

fn kind_letter(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::I => "I",
        ShapeKind::J => "J",
        ShapeKind::L => "L",
        ShapeKind::S => "S",
        ShapeKind::Z => "Z",
        ShapeKind::O => "O",
        ShapeKind::T => "T",
    }
}
