//! BoardView: maps a board snapshot onto a drawing surface.
//!
//! This module is pure (no I/O). Geometry follows the classic canvas layout:
//! cells of `cell_size` pixels separated by a 1px border, grid strokes offset
//! by half a pixel so they land on a single column or row.

use tracing::trace;

use crate::core::BoardSnapshot;
use crate::term::pixmap::{Pixmap, Rgb};
use crate::term::surface::Surface;
use crate::types::{PieceKind, BORDER_SIZE, DEFAULT_CELL_SIZE};

/// Grid stroke color.
const GRID_COLOR: Rgb = Rgb::BLACK;

/// Fill color for a locked piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0x00, 0xff, 0xff),
        PieceKind::J => Rgb::new(0x00, 0x00, 0xff),
        PieceKind::L => Rgb::new(0xff, 0xa5, 0x00),
        PieceKind::O => Rgb::new(0xff, 0xff, 0x00),
        PieceKind::S => Rgb::new(0x00, 0xff, 0x00),
        PieceKind::T => Rgb::new(0x80, 0x00, 0x80),
        PieceKind::Z => Rgb::new(0xff, 0x00, 0x00),
    }
}

/// Renders board snapshots with fixed cell and border metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView {
    /// Cell edge length in pixels.
    cell_size: u32,
    /// Gap between adjacent cells and around the outer edge.
    border_size: u32,
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE)
    }
}

impl BoardView {
    pub fn new(cell_size: u32) -> Self {
        assert!(cell_size >= 1, "cell size must be >= 1");
        Self {
            cell_size,
            border_size: BORDER_SIZE,
        }
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn border_size(&self) -> u32 {
        self.border_size
    }

    /// Distance between the start of one cell and the next.
    fn pitch(&self) -> u32 {
        self.cell_size + self.border_size
    }

    /// Canvas pixel width for a board of `board_width` cells.
    pub fn canvas_width(&self, board_width: u32) -> u32 {
        board_width * self.cell_size + board_width + self.border_size
    }

    /// Canvas pixel height for a board of `board_height` cells.
    pub fn canvas_height(&self, board_height: u32) -> u32 {
        board_height * self.cell_size + board_height + self.border_size
    }

    /// Stroke the grid: one vertical line per column boundary, one horizontal
    /// line per row boundary. `(width + 1) + (height + 1)` strokes total.
    pub fn draw_grid<S: Surface>(&self, width: u32, height: u32, surface: &mut S) {
        let pitch = self.pitch() as f32;
        let border = self.border_size as f32;

        for col in 0..=width {
            let x = col as f32 * pitch + 0.5;
            surface.stroke_line(x, 0.0, x, pitch * height as f32 + border, GRID_COLOR);
        }

        for row in 0..=height {
            let y = row as f32 * pitch + 0.5;
            surface.stroke_line(0.0, y, pitch * width as f32 + border, y, GRID_COLOR);
        }
    }

    /// Fill every occupied cell of the snapshot. Visits all cells; empty
    /// cells emit nothing.
    pub fn draw_board<S: Surface>(&self, snapshot: &BoardSnapshot, surface: &mut S) {
        let pitch = self.pitch();
        let cell = self.cell_size as f32;

        for y in 0..snapshot.height() {
            for x in 0..snapshot.width() {
                if let Some(Some(kind)) = snapshot.get(x, y) {
                    let px = (x * pitch + self.border_size) as f32;
                    let py = (y * pitch + self.border_size) as f32;
                    surface.fill_rect(px, py, cell, cell, piece_color(kind));
                }
            }
        }
    }

    /// Render one complete frame: blank canvas, grid, then cells.
    pub fn render(&self, snapshot: &BoardSnapshot) -> Pixmap {
        let mut frame = Pixmap::new(
            self.canvas_width(snapshot.width()),
            self.canvas_height(snapshot.height()),
        );
        self.draw_grid(snapshot.width(), snapshot.height(), &mut frame);
        self.draw_board(snapshot, &mut frame);
        trace!(
            width = frame.width(),
            height = frame.height(),
            revision = snapshot.revision(),
            "frame rendered"
        );
        frame
    }
}
