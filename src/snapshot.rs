use serde::Serialize;

use crate::core::{Board, GridError};
use crate::engine::ActivePiece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: &'static str,
    pub rotation: &'static str,
    pub row: i32,
    pub col: i32,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind.as_str(),
            rotation: value.rotation.as_str(),
            row: value.position.row,
            col: value.position.col,
        }
    }
}

/// Serializable view of a board and, optionally, the piece above it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    /// 1 for occupied, 0 for empty; top row first
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub landed: Option<bool>,
    pub ghost_row: Option<i32>,
}

impl BoardSnapshot {
    pub fn capture(board: &Board, active: Option<&ActivePiece>) -> Result<Self, GridError> {
        let mut cells = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (out, row) in cells.iter_mut().zip(board.row_slices()) {
            for (out, cell) in out.iter_mut().zip(row) {
                *out = cell.is_occupied() as u8;
            }
        }

        let (landed, ghost_row) = match active {
            Some(piece) => (Some(piece.landed(board)?), Some(piece.ghost_row(board)?)),
            None => (None, None),
        };

        Ok(Self {
            board: cells,
            active: active.copied().map(ActiveSnapshot::from),
            landed,
            ghost_row,
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.board
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell != 0)
            .count()
    }
}
