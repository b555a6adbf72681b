//! Core module - board state and snapshots, no I/O
//!
//! Everything here is deterministic and renderable-agnostic. The board owns
//! its cells; the rest of the crate only ever sees [`BoardSnapshot`] copies.

pub mod board;
pub mod snapshot;

pub use board::Board;
pub use snapshot::{BoardSnapshot, SnapshotError};
