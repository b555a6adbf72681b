//! Owned board snapshots and the byte-buffer wire form.
//!
//! A snapshot is a copy of the board's cells taken at a known revision. The
//! render side works exclusively from snapshots, so nothing it holds can be
//! invalidated while a frame is being drawn. The byte codec mirrors the cell
//! buffer layout of the board's linear-memory export: one tag byte per cell,
//! row-major, `row * width + column`.

use thiserror::Error;

use crate::types::{cell_code, cell_from_code, Cell};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("cell buffer length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("invalid cell tag {value} at index {index}")]
    InvalidTag { index: usize, value: u8 },
}

/// An owned copy of board state at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    width: u32,
    height: u32,
    revision: u64,
    cells: Vec<Cell>,
}

impl BoardSnapshot {
    pub(crate) fn new(width: u32, height: u32, revision: u64, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            revision,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Revision of the board this snapshot was taken from. A reader holding
    /// two snapshots can compare revisions to detect intervening mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get cell at position (x, y). Returns None if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// True when no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_none)
    }

    /// Encode as the wire form: exactly `width * height` tag bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.cells.iter().map(|&c| cell_code(c)).collect()
    }

    /// Decode a wire-form cell buffer into a snapshot (revision 0).
    ///
    /// The buffer must hold exactly `width * height` bytes and every byte
    /// must be a valid cell tag.
    pub fn from_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, SnapshotError> {
        let expected = (width as usize) * (height as usize);
        if bytes.len() != expected {
            return Err(SnapshotError::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        let mut cells = Vec::with_capacity(expected);
        for (index, &value) in bytes.iter().enumerate() {
            match cell_from_code(value) {
                Some(cell) => cells.push(cell),
                None => return Err(SnapshotError::InvalidTag { index, value }),
            }
        }

        Ok(Self::new(width, height, 0, cells))
    }
}
