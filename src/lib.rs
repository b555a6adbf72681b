//! Terminal viewer for a Tetris board.
//!
//! The board module owns authoritative cell state; the render side reads
//! owned, versioned snapshots of it and repaints a pixel grid on a fixed
//! tick. No raw buffer is ever shared across a tick boundary.
//!
//! # Module Structure
//!
//! - [`types`]: cell tags, wire byte codes, and default metrics
//! - [`core`]: the board and its snapshot/codec (pure, no I/O)
//! - [`term`]: surface seam, pixel framebuffer, board view, terminal flush
//! - [`run`]: the cancellable tick loop driving board and view
//!
//! # Example
//!
//! ```
//! use tetris_view::core::Board;
//! use tetris_view::term::{BoardView, OpRecorder};
//! use tetris_view::types::PieceKind;
//!
//! let mut board = Board::new(10, 25);
//! board.set(0, 0, Some(PieceKind::I));
//!
//! let view = BoardView::new(25);
//! let mut ops = OpRecorder::new();
//! view.draw_board(&board.snapshot(), &mut ops);
//! assert_eq!(ops.rect_count(), 1);
//! ```

pub mod core;
pub mod run;
pub mod term;
pub mod types;

// Re-export commonly used types for convenience
pub use crate::core::{Board, BoardSnapshot, SnapshotError};
pub use run::{RenderLoop, StopHandle};
pub use term::{piece_color, BoardView, DrawOp, OpRecorder, Pixmap, Rgb, Surface, TerminalRenderer};
