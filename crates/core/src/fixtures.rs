//! Named board layouts used by the replay tool, tests and benches.

use crate::board::Board;
use crate::types::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardFixture {
    Empty,
    /// A single tile at row 19, column 3
    OneTile,
    /// Row 19, columns 3 and 4
    TwoTiles,
    /// A 2x2 block in rows 18-19, columns 3-4
    FourTiles,
    /// Rows 18-19 filled in columns 3 and 6-7, column 4 only in row 19,
    /// column 5 open to the floor
    WithHole,
}

impl BoardFixture {
    pub const ALL: [BoardFixture; 5] = [
        BoardFixture::Empty,
        BoardFixture::OneTile,
        BoardFixture::TwoTiles,
        BoardFixture::FourTiles,
        BoardFixture::WithHole,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "empty" => Some(BoardFixture::Empty),
            "one-tile" => Some(BoardFixture::OneTile),
            "two-tiles" => Some(BoardFixture::TwoTiles),
            "four-tiles" => Some(BoardFixture::FourTiles),
            "with-hole" => Some(BoardFixture::WithHole),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BoardFixture::Empty => "empty",
            BoardFixture::OneTile => "one-tile",
            BoardFixture::TwoTiles => "two-tiles",
            BoardFixture::FourTiles => "four-tiles",
            BoardFixture::WithHole => "with-hole",
        }
    }

    /// Occupied `(row, col)` cells of the layout
    pub fn tiles(&self) -> &'static [(i32, i32)] {
        match self {
            BoardFixture::Empty => &[],
            BoardFixture::OneTile => &[(19, 3)],
            BoardFixture::TwoTiles => &[(19, 3), (19, 4)],
            BoardFixture::FourTiles => &[(18, 3), (18, 4), (19, 3), (19, 4)],
            BoardFixture::WithHole => &[
                (18, 3),
                (18, 6),
                (18, 7),
                (19, 3),
                (19, 4),
                (19, 6),
                (19, 7),
            ],
        }
    }

    pub fn build(&self) -> Board {
        let mut board = Board::new();
        for &(row, col) in self.tiles() {
            board.set(row, col, Cell::Occupied);
        }
        board
    }
}
