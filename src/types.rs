//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default board dimensions (cells)
pub const DEFAULT_BOARD_WIDTH: u32 = 10;
pub const DEFAULT_BOARD_HEIGHT: u32 = 25;

/// Default cell edge length in surface pixels
pub const DEFAULT_CELL_SIZE: u32 = 25;

/// Gap reserved between adjacent cells and around the outer edge (pixels)
pub const BORDER_SIZE: u32 = 1;

/// Default render tick interval (milliseconds)
pub const DEFAULT_TICK_MS: u64 = 1000;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

/// All piece kinds in wire-code order
pub const PIECE_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::J,
    PieceKind::L,
    PieceKind::O,
    PieceKind::S,
    PieceKind::T,
    PieceKind::Z,
];

impl PieceKind {
    /// Byte code used by the cell buffer wire form (0 is reserved for empty)
    pub fn code(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Parse a wire byte code (1..=7)
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::J),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::S),
            6 => Some(PieceKind::T),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// Encode a cell as its wire byte (empty = 0)
pub fn cell_code(cell: Cell) -> u8 {
    cell.map(PieceKind::code).unwrap_or(0)
}

/// Decode a wire byte into a cell; `None` means the byte is not a valid tag
pub fn cell_from_code(code: u8) -> Option<Cell> {
    if code == 0 {
        return Some(None);
    }
    PieceKind::from_code(code).map(Some)
}
