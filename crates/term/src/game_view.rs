//! GameView: maps a `GameSession` into a terminal framebuffer.
//!
//! The board and the falling piece arrive through the session's `Renderer`
//! interface; the side panel and overlays read a snapshot. Pure (no I/O), so
//! it can be unit-tested.

use crate::core::{Board, GameSession, GameSnapshot, Piece, Renderer};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, COLS, ROWS};

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

/// One leaderboard line shown in the side panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderRow {
    pub name: String,
    pub score: u32,
}

/// Host-side extras drawn next to the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hud<'a> {
    pub muted: bool,
    pub leaderboard: &'a [LeaderRow],
}

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Where the bordered board sits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardFrame {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

/// A lightweight terminal renderer for the game.
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
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn frame(&self, viewport: Viewport) -> BoardFrame {
        let w = (COLS as u16) * self.cell_w + 2;
        let h = (ROWS as u16) * self.cell_h + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        BoardFrame { x, y, w, h }
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, session: &GameSession, hud: &Hud<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let frame = self.frame(viewport);
        draw_border(fb, frame, CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG));

        let mut painter = BoardPainter {
            view: self,
            fb: &mut *fb,
            frame,
        };
        session.render(&mut painter);

        let snap = session.snapshot();
        self.draw_side_panel(fb, &snap, hud, viewport, frame);

        if snap.paused() {
            self.draw_overlay(fb, frame, "PAUSED", "P to resume");
        } else if snap.game_over() {
            self.draw_overlay(fb, frame, "GAME OVER", "R to restart");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &GameSession, hud: &Hud<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, hud, viewport, &mut fb);
        fb
    }

    fn fill_cell_rect(&self, fb: &mut FrameBuffer, frame: BoardFrame, cell_x: u16, cell_y: u16, ch: char, style: CellStyle) {
        let px = frame.x + 1 + cell_x * self.cell_w;
        let py = frame.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, hud: &Hud<'_>, viewport: Viewport, frame: BoardFrame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let dim = value.dim();

        let mut y = frame.y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("HIGH", snap.high_score),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, n, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "LEVEL", label);
        fb.put_str(panel_x, y + 1, &snap.difficulty.as_str().to_ascii_uppercase(), value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "SOUND", label);
        fb.put_str(panel_x, y + 1, if hud.muted { "OFF" } else { "ON" }, value);
        y = y.saturating_add(3);

        if hud.leaderboard.is_empty() {
            return;
        }
        fb.put_str(panel_x, y, "TOP", label);
        y = y.saturating_add(1);
        for (i, row) in hud.leaderboard.iter().enumerate() {
            if y >= viewport.height {
                break;
            }
            let x = fb.put_u32(panel_x, y, (i as u32) + 1, dim);
            let x = fb.put_str(x + 1, y, &row.name, value);
            fb.put_u32(x + 1, y, row.score, dim);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, frame: BoardFrame, title: &str, hint: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let title_style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        let hint_style = CellStyle::new(Rgb::new(180, 180, 180), SCREEN_BG);
        fb.put_str_centered(frame.x, mid_y, frame.w, title, title_style);
        fb.put_str_centered(frame.x, mid_y + 1, frame.w, hint, hint_style);
    }
}

/// Adapts the framebuffer to the session's draw calls.
struct BoardPainter<'a> {
    view: &'a GameView,
    fb: &'a mut FrameBuffer,
    frame: BoardFrame,
}

impl Renderer for BoardPainter<'_> {
    fn draw_board(&mut self, board: &Board) {
        let empty = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        for (y, row) in board.rows().iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                match PieceKind::from_id(cell) {
                    Some(kind) => {
                        self.view
                            .fill_cell_rect(self.fb, self.frame, x as u16, y as u16, '█', kind_style(kind))
                    }
                    None => self.view.fill_cell_rect(self.fb, self.frame, x as u16, y as u16, '·', empty),
                }
            }
        }
    }

    fn draw_piece(&mut self, piece: &Piece) {
        let style = kind_style(piece.kind).bold();
        for (x, y) in piece.cells() {
            if x >= 0 && (x as usize) < COLS && y >= 0 && (y as usize) < ROWS {
                self.view.fill_cell_rect(self.fb, self.frame, x as u16, y as u16, '█', style);
            }
        }
    }
}

fn kind_style(kind: PieceKind) -> CellStyle {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    };
    CellStyle::new(fg, PLAY_BG)
}

fn draw_border(fb: &mut FrameBuffer, frame: BoardFrame, style: CellStyle) {
    let BoardFrame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }

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
