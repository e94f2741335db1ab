//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Screen, Theme};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{CellKind, BLOCK_SIZE, BOARD_HEIGHT, BOARD_WIDTH};

const BOARD_BG: Rgb = Rgb::new(24, 24, 32);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const SWEEP_BG: Rgb = Rgb::new(60, 60, 84);

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

/// Everything outside the session that affects a frame.
#[derive(Debug, Clone, Copy)]
pub struct HudView<'a> {
    pub screen: Screen,
    pub theme: &'a Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the board, sweep and side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Board frame placement inside the viewport
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// Callers reuse the framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: HudView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let frame = self.frame(viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w - 2,
            frame.h - 2,
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );
        self.draw_border(fb, frame, border);

        let sweep_column = (hud.screen == Screen::Arcade).then_some(snap.timeline.column);
        if sweep_column.is_some() {
            self.draw_sweep(fb, snap, frame);
        }

        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                let kind = snap.board[y][x];
                if kind.is_filled() {
                    self.draw_block(fb, frame, x as u16, y as u16, kind, snap.marked[y][x], hud.theme);
                } else {
                    self.draw_empty_cell(fb, frame, x as u16, y as u16, sweep_column);
                }
            }
        }

        if hud.screen == Screen::Arcade && snap.piece.active {
            self.draw_piece(fb, snap, frame, hud.theme);
        }

        self.draw_side_panel(fb, snap, hud, viewport, frame);

        match hud.screen {
            Screen::Title { .. } => {
                self.draw_overlay_text(fb, frame, 0, "LUMINES");
                self.draw_overlay_text(fb, frame, 2, "PRESS ENTER");
                if let Some(outcome) = snap.outcome {
                    self.draw_overlay_score(fb, frame, 4, "LAST ", outcome.final_score());
                }
            }
            Screen::GameOver { final_score, .. } => {
                self.draw_overlay_text(fb, frame, 0, "GAME OVER");
                self.draw_overlay_score(fb, frame, 2, "SCORE ", final_score);
            }
            Screen::Arcade => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: HudView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    /// Top-left terminal position of board cell (x, y).
    pub fn cell_origin(&self, viewport: Viewport, x: u16, y: u16) -> (u16, u16) {
        let frame = self.frame(viewport);
        (
            frame.x + 1 + x * self.cell_w,
            frame.y + 1 + y * self.cell_h,
        )
    }

    fn frame(&self, viewport: Viewport) -> Frame {
        let w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame, style: CellStyle) {
        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(f.x + f.w - 1, f.y, '┐', style);
        fb.put_char(f.x, f.y + f.h - 1, '└', style);
        fb.put_char(f.x + f.w - 1, f.y + f.h - 1, '┘', style);

        for dx in 1..f.w - 1 {
            fb.put_char(f.x + dx, f.y, '─', style);
            fb.put_char(f.x + dx, f.y + f.h - 1, '─', style);
        }
        for dy in 1..f.h - 1 {
            fb.put_char(f.x, f.y + dy, '│', style);
            fb.put_char(f.x + f.w - 1, f.y + dy, '│', style);
        }
    }

    /// Marker on the top border above the swept column.
    fn draw_sweep(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, f: Frame) {
        let column = snap.timeline.column as u16;
        let offset = (snap.timeline.phase as u16 * self.cell_w) / BLOCK_SIZE as u16;
        let marker_x = f.x + 1 + column * self.cell_w + offset.min(self.cell_w - 1);
        fb.put_char(
            marker_x,
            f.y,
            '▼',
            CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold(),
        );
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, f: Frame, x: u16, y: u16, sweep: Option<u8>) {
        let bg = if sweep == Some(x as u8) { SWEEP_BG } else { BOARD_BG };
        let style = CellStyle::new(Rgb::new(90, 90, 100), bg).dim();
        self.fill_cell_rect(fb, f, x, y, '·', style);
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        f: Frame,
        x: u16,
        y: u16,
        kind: CellKind,
        marked: bool,
        theme: &Theme,
    ) {
        let style = if marked {
            theme
                .light(kind)
                .map(|fg| CellStyle::new(fg, BOARD_BG).bold())
        } else {
            theme.dark(kind).map(|fg| CellStyle::new(fg, BOARD_BG))
        };
        if let Some(style) = style {
            self.fill_cell_rect(fb, f, x, y, '█', style);
        }
    }

    fn draw_piece(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, f: Frame, theme: &Theme) {
        let piece = snap.piece;
        for (slot, &kind) in piece.cells.iter().enumerate() {
            let x = piece.x as i16 + (slot % 2) as i16;
            let y = piece.y as i16 + (slot / 2) as i16;
            // Rows above the board stay hidden.
            if !(0..BOARD_WIDTH as i16).contains(&x) || !(0..BOARD_HEIGHT as i16).contains(&y) {
                continue;
            }
            if let Some(fg) = theme.light(kind) {
                self.fill_cell_rect(fb, f, x as u16, y as u16, '▓', CellStyle::new(fg, BOARD_BG));
            }
        }
    }

    fn fill_cell_rect(&self, fb: &mut FrameBuffer, f: Frame, x: u16, y: u16, ch: char, style: CellStyle) {
        let px = f.x + 1 + x * self.cell_w;
        let py = f.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: HudView<'_>,
        viewport: Viewport,
        f: Frame,
    ) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = f.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "CLEARED", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.pending_cleared, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "THEME", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, hud.theme.name, value);
        y = y.saturating_add(1);
        let mut sx = panel_x;
        for kind in [CellKind::ColorA, CellKind::ColorB] {
            if let Some(fg) = hud.theme.light(kind) {
                fb.fill_rect(sx, y, 2, 1, '█', CellStyle::new(fg, PANEL_BG));
            }
            sx = sx.saturating_add(3);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, f: Frame, line: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = f.x.saturating_add(f.w.saturating_sub(text_w) / 2);
        let y = self.overlay_y(f, line);
        fb.put_str(x, y, text, overlay_style());
    }

    fn draw_overlay_score(&self, fb: &mut FrameBuffer, f: Frame, line: u16, label: &str, score: u32) {
        let text_w = label.chars().count() as u16 + digit_count(score);
        let x = f.x.saturating_add(f.w.saturating_sub(text_w) / 2);
        let y = self.overlay_y(f, line);
        let x = fb.put_str(x, y, label, overlay_style());
        fb.put_u32(x, y, score, overlay_style());
    }

    fn overlay_y(&self, f: Frame, line: u16) -> u16 {
        f.y.saturating_add(f.h / 2).saturating_sub(2).saturating_add(line)
    }
}

fn overlay_style() -> CellStyle {
    CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold()
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
