//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by the grid engine and its
//! callers. All types are plain data with no external dependencies, so they
//! can be shared by the collision queries, the piece driver and the tooling.
//!
//! # Board Dimensions
//!
//! The tetrazone playfield:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn anchor**: row 0, column 3
//!
//! # Coordinates
//!
//! | Value | Order | Notes |
//! |-------|-------|-------|
//! | Board cell | `(row, col)` | row grows downwards |
//! | Piece offset | `(col, row)` | relative to the anchor, never negative |
//! | Anchor | [`Position`] | row may be negative while a piece enters the board |
//!
//! Offsets are column first, matching the shape tables. Rows and columns have
//! different extents, so the two orders must not be mixed up.
//!
//! # Examples
//!
//! ```
//! use tetrazone_types::{PieceKind, Rotation, Position, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! // Parse from string (case-insensitive)
//! let parsed = PieceKind::from_str("z").unwrap();
//! assert_eq!(parsed, PieceKind::Z);
//!
//! // Rotate
//! let rotated = Rotation::North.rotate_cw();
//! assert_eq!(rotated, Rotation::East);
//!
//! // Anchors are (row, col)
//! let anchor = Position::new(18, 3);
//! assert_eq!(anchor.below(), Some(Position::new(19, 3)));
//!
//! // Board dimensions
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Anchor a freshly spawned piece starts at
pub const SPAWN_POSITION: Position = Position { row: 0, col: 3 };

/// Offset of a single piece cell relative to the anchor, `(col, row)`
pub type MinoOffset = (i8, i8);

/// A single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied,
}

impl Cell {
    pub fn is_occupied(self) -> bool {
        matches!(self, Cell::Occupied)
    }

    /// Character used by the text board format
    pub fn as_char(self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::Occupied => 'X',
        }
    }
}

/// Board position of a piece anchor, `(row, col)`
///
/// Rows are signed: a piece may be partially above the board while it
/// enters, and searches may step past the last row before bounds checks
/// reject the position. Anchors are caller input and may hold any value,
/// so every step from one position to another is checked and yields `None`
/// when the coordinate does not fit in an `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Absolute board cell of a piece cell at `offset`
    ///
    /// # Examples
    ///
    /// ```
    /// use tetrazone_types::Position;
    ///
    /// // offsets are (col, row)
    /// assert_eq!(Position::new(18, 3).offset((2, 1)), Some(Position::new(19, 5)));
    /// assert_eq!(Position::new(i32::MAX, 3).offset((0, 1)), None);
    /// ```
    pub fn offset(self, (dcol, drow): MinoOffset) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(i32::from(drow))?,
            col: self.col.checked_add(i32::from(dcol))?,
        })
    }

    pub fn below(self) -> Option<Self> {
        Some(Self::new(self.row.checked_add(1)?, self.col))
    }

    pub fn left(self) -> Option<Self> {
        Some(Self::new(self.row, self.col.checked_sub(1)?))
    }

    pub fn right(self) -> Option<Self> {
        Some(Self::new(self.row, self.col.checked_add(1)?))
    }
}

/// The seven piece kinds, in the order of the game's shape table
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

impl PieceKind {
    /// All kinds in table order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetrazone_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
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

    /// Convert to lowercase string representation
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

    /// Row of this kind in the shape table
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Rotation states
///
/// - **North**: spawn orientation (rotation 0)
/// - **East**: rotated 90° clockwise (rotation 1)
/// - **South**: rotated 180° (rotation 2)
/// - **West**: rotated 270° clockwise (rotation 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetrazone_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Numeric rotation index (0-3) as used by the shape table
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse rotation from string
    ///
    /// Accepts full names, single letters or the numeric index
    /// (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" | "0" => Some(Rotation::North),
            "east" | "e" | "1" => Some(Rotation::East),
            "south" | "s" | "2" => Some(Rotation::South),
            "west" | "w" | "3" => Some(Rotation::West),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}
