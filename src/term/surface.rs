//! Drawing surface seam.
//!
//! [`BoardView`](crate::term::BoardView) issues strokes and fills against this
//! trait instead of a concrete canvas, so frames can be rasterized into a
//! [`Pixmap`](crate::term::Pixmap) for display or captured as an op list for
//! inspection. Coordinates are f32: a 1px stroke centered at `n + 0.5` lands
//! crisply on pixel column/row `n`.

use crate::term::pixmap::Rgb;

pub trait Surface {
    /// Stroke a 1px line between two points.
    fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgb);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb);
}

/// A single recorded drawing operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    Line {
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        color: Rgb,
    },
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgb,
    },
}

/// Surface that records every operation in issue order.
///
/// Opt-in diagnostics: wire one in wherever a `Surface` is expected to see
/// exactly what a draw pass emits. Tests use it to pin down op counts and
/// coordinates without a terminal.
#[derive(Debug, Default, Clone)]
pub struct OpRecorder {
    ops: Vec<DrawOp>,
}

impl OpRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn line_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count()
    }

    pub fn rect_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Rect { .. }))
            .count()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for OpRecorder {
    fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgb) {
        self.ops.push(DrawOp::Line {
            x0,
            y0,
            x1,
            y1,
            color,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        self.ops.push(DrawOp::Rect { x, y, w, h, color });
    }
}
