//! GameView: maps a `GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSession;
use crate::input::Cursor;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GemKind, BOARD_SIZE};

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

/// Glyph shown on cells holding the cleared sentinel.
const STAR_CH: char = '*';

/// How many of the most recent collected gems the side panel shows.
const LOG_TAIL: usize = 24;

/// A lightweight terminal view for the match-3 board.
pub struct GameView {
    /// Board cell width in terminal columns (2 compensates for glyph aspect).
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Render the session, cursor, and status line into a framebuffer.
    pub fn render(
        &self,
        session: &GameSession,
        cursor: Cursor,
        message: &str,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_px_w = (BOARD_SIZE as u16) * self.cell_w;
        let board_px_h = BOARD_SIZE as u16;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + SIDE_PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 2) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Board cells.
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let kind = session.board().get(row, col).flatten();
                let selected = session.selection().contains(&(row, col));
                let under_cursor = cursor.row == row && cursor.col == col;

                let (ch, mut style) = match kind {
                    Some(kind) => ('\u{25cf}', gem_style(kind)), // ●
                    None => (STAR_CH, star_style()),
                };
                if selected {
                    style.bg = Rgb::new(70, 70, 110);
                    style = style.bold();
                }
                if under_cursor {
                    style.bg = Rgb::new(110, 110, 60);
                }

                let x = start_x + 1 + (col as u16) * self.cell_w;
                let y = start_y + 1 + row as u16;
                fb.put_char(x, y, ch, style);
                // Pad the rest of the cell so highlights cover its full width.
                for dx in 1..self.cell_w {
                    fb.put_char(x + dx, y, ' ', style);
                }
            }
        }

        self.draw_side_panel(&mut fb, session, start_x + frame_w + 2, start_y);

        // Status line under the board.
        let status = CellStyle::default();
        fb.put_str(start_x, start_y + frame_h, message, status);
        fb.put_str(
            start_x,
            start_y + frame_h + 1,
            "arrows move · s selects · r restarts · q quits",
            CellStyle::new(Rgb::new(120, 120, 120), Rgb::new(0, 0, 0)),
        );

        fb
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
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

    fn draw_side_panel(&self, fb: &mut FrameBuffer, session: &GameSession, x: u16, y: u16) {
        let label = CellStyle::new(Rgb::new(150, 150, 150), Rgb::new(0, 0, 0));
        let value = CellStyle::default().bold();

        fb.put_str(x, y, "SCORE", label);
        fb.put_str(x, y + 1, &session.score().to_string(), value);

        fb.put_str(x, y + 3, "COLLECTED", label);
        let log = session.collected();
        let tail: String = log[log.len().saturating_sub(LOG_TAIL)..]
            .iter()
            .map(GemKind::as_char)
            .collect();
        fb.put_str(x, y + 4, &tail, value);
    }
}

/// Side panel width budget (for centering).
const SIDE_PANEL_W: u16 = 2 + LOG_TAIL as u16;

fn gem_style(kind: GemKind) -> CellStyle {
    let fg = match kind {
        GemKind::Coconut => Rgb::new(200, 170, 130),
        GemKind::Watermelon => Rgb::new(240, 90, 100),
        GemKind::Kiwi => Rgb::new(140, 200, 80),
        GemKind::Strawberry => Rgb::new(230, 50, 70),
        GemKind::Pineapple => Rgb::new(240, 210, 70),
        GemKind::Grape => Rgb::new(160, 90, 220),
    };
    CellStyle::new(fg, Rgb::new(25, 25, 35))
}

fn star_style() -> CellStyle {
    CellStyle::new(Rgb::new(255, 240, 150), Rgb::new(25, 25, 35)).bold()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameSession;

    fn frame_text(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_fits_viewport() {
        let session = GameSession::new(1);
        let view = GameView::default();
        let fb = view.render(&session, Cursor::new(), "", Viewport::new(80, 24));

        assert_eq!(fb.width(), 80);
        assert_eq!(fb.height(), 24);
    }

    #[test]
    fn test_render_shows_score_and_gems() {
        let session = GameSession::new(1);
        let view = GameView::default();
        let fb = view.render(&session, Cursor::new(), "welcome", Viewport::new(80, 24));

        let text = frame_text(&fb);
        assert!(text.contains("SCORE"));
        assert!(text.contains("COLLECTED"));
        assert!(text.contains("welcome"));
        // A fresh board is fully populated, so gem glyphs are on screen.
        assert!(text.contains('\u{25cf}'));
    }

    #[test]
    fn test_render_survives_tiny_viewport() {
        let session = GameSession::new(1);
        let view = GameView::default();
        // Clipping must not panic.
        let fb = view.render(&session, Cursor::new(), "hi", Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }

    #[test]
    fn test_gem_styles_are_distinct() {
        for a in GemKind::ALL {
            for b in GemKind::ALL {
                if a != b {
                    assert_ne!(gem_style(a), gem_style(b));
                }
            }
        }
        assert!(star_style().bold);
    }
}
