//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure, no I/O. The board is drawn at whatever size the snapshot reports.

use crate::core::catalog::offset_to_cell;
use crate::core::{GameSnapshot, NextPreview};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, PieceKind};

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
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

/// Board-plus-side-panel layout.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Terminal size of the bordered board for `snap`, saturating at `u16::MAX`.
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        (
            to_u16(snap.columns)
                .saturating_mul(self.cell_w)
                .saturating_add(2),
            to_u16(snap.rows).saturating_add(2),
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = viewport
            .width
            .saturating_sub(frame_w.saturating_add(PANEL_WIDTH))
            / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::new(PLAY_BG, PLAY_BG),
        );
        draw_border(
            fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG),
        );

        // Cells past the viewport edge are clipped.
        let visible_rows = snap.rows.min(viewport.height as usize);
        let visible_cols = snap.columns.min(viewport.width as usize);
        for row in 0..visible_rows {
            for col in 0..visible_cols {
                let (ch, style) = match snap.get(col, row) {
                    Some(color) => ('█', CellStyle::new(color.into(), PLAY_BG)),
                    None => ('·', CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG)),
                };
                let px = (start_x + 1).saturating_add(to_u16(col).saturating_mul(self.cell_w));
                let py = (start_y + 1).saturating_add(to_u16(row));
                fb.fill_rect(px, py, self.cell_w, 1, ch, style);
            }
        }

        self.draw_side_panel(
            fb,
            snap,
            start_x.saturating_add(frame_w).saturating_add(2),
            start_y,
        );

        if snap.game_over() {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, top: u16) {
        if x >= fb.width() {
            return;
        }
        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = top;
        for (name, number, digits) in [
            ("SCORE", snap.score, 6),
            ("LINES", snap.lines, 3),
            ("LEVEL", snap.level, 2),
        ] {
            fb.put_str(x, y, name, label);
            fb.put_padded(x, y + 1, number, digits, value);
            y += 3;
        }

        fb.put_str(x, y, "NEXT", label);
        draw_preview(fb, x, y + 1, self.cell_w, &snap.next);
        y += 6;

        fb.put_str(x, y, "STATS", label);
        for kind in PieceKind::ALL {
            y += 1;
            fb.put_str(x, y, kind.as_str(), value);
            fb.put_padded(x + 2, y, snap.stats[kind.index()], 3, value);
        }
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Side panel width reserved when centering: label column plus preview box.
const PANEL_WIDTH: u16 = 12;

fn draw_preview(fb: &mut FrameBuffer, x: u16, y: u16, cell_w: u16, next: &NextPreview) {
    let style = CellStyle::new(Rgb::from(next.color), PANEL_BG);
    for &offset in next.offsets.iter() {
        let (col, row) = offset_to_cell(offset);
        fb.fill_rect(
            x + col as u16 * cell_w,
            y + row as u16,
            cell_w,
            1,
            '█',
            style,
        );
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

fn draw_overlay_text(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    text: &str,
) {
    let mid_y = start_y.saturating_add(frame_h / 2);
    let text_w = text.chars().count() as u16;
    let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::from(Color(0x00_00_00))).bold();
    fb.put_str(x, mid_y, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    #[test]
    fn frame_tracks_snapshot_dimensions() {
        let snap = GameState::with_seed(1).snapshot();
        assert_eq!(GameView::default().frame_size(&snap), (22, 26));
        assert_eq!(GameView::new(1).frame_size(&snap), (12, 26));
    }

    #[test]
    fn oversized_board_saturates_and_clips() {
        use crate::core::{EngineConfig, SimpleRng};

        let config = EngineConfig {
            rows: 4,
            columns: 33_000,
            start_level: 0,
        };
        let snap = GameState::new(config, SimpleRng::new(1))
            .unwrap()
            .snapshot();
        let view = GameView::default();
        assert_eq!(view.frame_size(&snap), (u16::MAX, 6));

        // Frame wider than the viewport: pinned to the left edge, rows centered.
        let fb = view.render(&snap, Viewport::new(40, 20));
        assert_eq!(fb.get(0, 7).unwrap().ch, '┌');
        assert_eq!(fb.get(1, 8).unwrap().ch, '·');
        assert_eq!(fb.get(39, 8).unwrap().ch, '·');
    }

    #[test]
    fn preview_draws_four_blocks() {
        let snap = GameState::with_seed(3).snapshot();
        let mut fb = FrameBuffer::new(8, 4);
        draw_preview(&mut fb, 0, 0, 2, &snap.next);
        let filled = fb.cells_matching('█');
        assert_eq!(filled, 8);
    }

    impl FrameBuffer {
        fn cells_matching(&self, ch: char) -> usize {
            (0..self.height())
                .flat_map(|y| (0..self.width()).map(move |x| (x, y)))
                .filter(|&(x, y)| self.get(x, y).map(|c| c.ch) == Some(ch))
                .count()
        }
    }
}
