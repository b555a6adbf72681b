//! Terminal rendering module.
//!
//! The pipeline is split the same way the draw path of a canvas page would
//! be: a pure view emits strokes and fills against a [`Surface`], a
//! [`Pixmap`] rasterizes them, and [`TerminalRenderer`] flushes pixels to the
//! terminal. Only the renderer touches I/O.

pub mod board_view;
pub mod pixmap;
pub mod renderer;
pub mod surface;

pub use board_view::{piece_color, BoardView};
pub use pixmap::{Pixmap, Rgb};
pub use renderer::TerminalRenderer;
pub use surface::{DrawOp, OpRecorder, Surface};
