//! GameView: draws a [`GameSnapshot`] into a framebuffer.
//!
//! Pure (no I/O), so layouts can be unit-tested.

use crate::core::{FallingPiece, GameSnapshot, Tetrimino};
use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CELL};

const BLOCK: char = '█';
const SHADOW: char = '░';
const GRID_DOT: char = '·';

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Foreground color for each color id, indexed by id (0 unused).
const PIECE_COLORS: [Rgb; 8] = [
    Rgb::new(90, 90, 100),
    Rgb::new(80, 220, 220),
    Rgb::new(240, 220, 80),
    Rgb::new(200, 120, 220),
    Rgb::new(100, 220, 120),
    Rgb::new(220, 80, 80),
    Rgb::new(80, 120, 220),
    Rgb::new(255, 165, 0),
];

/// Panel columns needed to the right of the well.
const PANEL_MIN_W: u16 = 10;

/// Widest supported board cell, in terminal columns.
pub const MAX_CELL_WIDTH: u16 = 4;

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

pub fn piece_color(id: Cell) -> Rgb {
    PIECE_COLORS
        .get(id as usize)
        .copied()
        .unwrap_or(PIECE_COLORS[0])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
    /// Draw a faint dot in empty cells.
    show_grid: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps cells roughly square in most fonts.
        Self {
            cell_w: 2,
            show_grid: true,
        }
    }
}

impl GameView {
    /// `cell_w` is clamped to `1..=MAX_CELL_WIDTH`.
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_WIDTH),
            ..Self::default()
        }
    }

    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    pub fn cell_width(&self) -> u16 {
        self.cell_w
    }

    /// Outer size of the bordered well.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16).saturating_mul(self.cell_w).saturating_add(2),
            BOARD_HEIGHT as u16 + 2,
        )
    }

    /// Top-left corner of the well frame for a viewport.
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        let total_w = frame_w.saturating_add(2 + PANEL_MIN_W);
        (
            viewport.width.saturating_sub(total_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let (frame_w, frame_h) = self.frame_size();
        let (ox, oy) = self.frame_origin(viewport);

        let well = CellStyle::new(PIECE_COLORS[0], WELL_BG);
        fb.fill_rect(
            ox.saturating_add(1),
            oy.saturating_add(1),
            frame_w - 2,
            frame_h - 2,
            ' ',
            well,
        );
        fb.draw_box(
            ox,
            oy,
            frame_w,
            frame_h,
            CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG),
        );

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &id) in row.iter().enumerate() {
                if id != EMPTY_CELL {
                    self.draw_cell(fb, ox, oy, x as i8, y as i8, BLOCK, block_style(id));
                } else if self.show_grid {
                    self.draw_cell(fb, ox, oy, x as i8, y as i8, GRID_DOT, well.dim());
                }
            }
        }

        if let Some(shadow) = snap.shadow() {
            let style = CellStyle::new(Rgb::new(140, 140, 140), WELL_BG).dim();
            self.draw_piece(fb, ox, oy, &shadow, |_| (SHADOW, style));
        }
        if let Some(active) = snap.active {
            self.draw_piece(fb, ox, oy, &active, |id| (BLOCK, block_style(id)));
        }

        self.draw_side_panel(fb, snap, ox.saturating_add(frame_w).saturating_add(2), oy);

        if snap.game_over {
            self.draw_banner(fb, ox, oy, "GAME OVER");
        } else if snap.paused {
            self.draw_banner(fb, ox, oy, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Fill one board cell. Cells outside the well are skipped.
    #[allow(clippy::too_many_arguments)]
    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        ox: u16,
        oy: u16,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = ox
            .saturating_add(1)
            .saturating_add((x as u16).saturating_mul(self.cell_w));
        let py = oy.saturating_add(1 + y as u16);
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_piece(
        &self,
        fb: &mut FrameBuffer,
        ox: u16,
        oy: u16,
        piece: &FallingPiece,
        look: impl Fn(Cell) -> (char, CellStyle),
    ) {
        for (x, y, id) in piece.cells() {
            let (ch, style) = look(id);
            self.draw_cell(fb, ox, oy, x, y, ch, style);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, px: u16, top: u16) {
        if px.saturating_add(PANEL_MIN_W) > fb.width() {
            return;
        }
        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = top;
        fb.put_str(px, y, &snap.edition.as_str().to_ascii_uppercase(), label.dim());
        y += 2;

        for (name, n) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(px, y, name, label);
            fb.put_u32(px, y + 1, n, value);
            y += 3;
        }

        if snap.next.is_empty() {
            return;
        }
        fb.put_str(px, y, "NEXT", label);
        y += 1;
        for &kind in &snap.next {
            let tiles = Tetrimino::for_edition(kind, snap.edition);
            y = self.draw_preview(fb, px, y, &tiles) + 1;
            if y >= fb.height() {
                break;
            }
        }
    }

    /// Draw a matrix's filled rows at `(x, y)`. Returns the row after it.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, tiles: &Tetrimino) -> u16 {
        let Some(min_dy) = tiles.tiles().map(|(_, dy, _)| dy).min() else {
            return y;
        };
        let mut max_dy = min_dy;
        for (dx, dy, id) in tiles.tiles() {
            let cx = x.saturating_add((dx as u16).saturating_mul(self.cell_w));
            let cy = y + (dy - min_dy) as u16;
            fb.fill_rect(cx, cy, self.cell_w, 1, BLOCK, block_style(id));
            max_dy = max_dy.max(dy);
        }
        y + (max_dy - min_dy) as u16 + 1
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, text: &str) {
        let (frame_w, frame_h) = self.frame_size();
        let text_w = text.chars().count() as u16;
        let x = ox.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        fb.put_str(x, oy.saturating_add(frame_h / 2), text, style);
    }
}

fn block_style(id: Cell) -> CellStyle {
    CellStyle::new(piece_color(id), WELL_BG).bold()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn unknown_color_id_falls_back_to_grey() {
        assert_eq!(piece_color(2), Rgb::new(240, 220, 80));
        assert_eq!(piece_color(42), piece_color(0));
    }

    #[test]
    fn frame_size_scales_with_cell_width() {
        assert_eq!(GameView::new(2).frame_size(), (22, 22));
        assert_eq!(GameView::new(1).frame_size(), (12, 22));
        assert_eq!(GameView::new(0).cell_width(), 1);
    }

    #[test]
    fn oversized_cell_width_is_clamped() {
        let view = GameView::new(7000);
        assert_eq!(view.cell_width(), MAX_CELL_WIDTH);
        assert_eq!(view.frame_size(), (42, 22));

        let fb = view.render(&GameSnapshot::default(), Viewport::new(60, 24));
        assert_eq!(fb.width(), 60);
    }

    #[test]
    fn prototype_preview_uses_upright_shapes() {
        let view = GameView::new(1);
        let mut fb = FrameBuffer::new(4, 4);
        let l = Tetrimino::for_edition(PieceKind::L, crate::types::Edition::Prototype);
        let next = view.draw_preview(&mut fb, 0, 0, &l);
        assert_eq!(next, 3);
        assert_eq!(fb.row_text(0), "█   ");
        assert_eq!(fb.row_text(2), "██  ");
    }

    #[test]
    fn preview_skips_empty_matrix_rows() {
        let view = GameView::new(2);
        let mut fb = FrameBuffer::new(10, 4);
        let next = view.draw_preview(&mut fb, 0, 0, &Tetrimino::template(PieceKind::I));
        assert_eq!(next, 1);
        assert_eq!(fb.row_text(0), "████████  ");
    }
}
