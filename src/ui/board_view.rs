//! Board rendering for the replay viewer

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::frames::Frame;
use super::theme::*;
use crate::Pos;

/// Draws one frame as a grid of cells with a token per occupied cell
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render a frame into the available space
    pub fn show(&mut self, ui: &mut egui::Ui, frame: &Frame) {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / frame.size.max(1) as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::hover());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter, frame.size);

        for (index, cells) in frame.cells.iter().enumerate() {
            for &pos in cells {
                self.draw_token(&painter, pos, index);
            }
        }

        if let Some(line) = &frame.winning_line {
            self.draw_winning_line(&painter, line);
        }

        if let Some(pos) = frame.last_move {
            painter.circle_filled(self.cell_center(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }
    }

    /// Draw cell borders
    fn draw_grid(&self, painter: &Painter, size: usize) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let extent = size as f32 * self.cell_size;

        for i in 0..=size {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + extent);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + extent, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_token(&self, painter: &Painter, pos: Pos, index: usize) {
        let radius = self.cell_size * TOKEN_RADIUS_RATIO;
        painter.circle_filled(self.cell_center(pos), radius, token_color(index));
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment([self.cell_center(pair[0]), self.cell_center(pair[1])], stroke);
        }
        for &pos in line {
            let radius = self.cell_size * TOKEN_RADIUS_RATIO + 3.0;
            painter.circle_stroke(self.cell_center(pos), radius, stroke);
        }
    }

    /// Convert board position to the screen coordinates of the cell center
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
