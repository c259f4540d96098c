//! The active falling piece and its moves.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::core::collision::{self, landing_rows};
use crate::core::pieces::{piece_spec, try_rotate, PieceShape, PieceSpec};
use crate::core::{Board, GridError};
use crate::types::{PieceKind, Position, Rotation, SPAWN_POSITION};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub position: Position,
}

/// Result of locking a piece into the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockOutcome {
    /// Anchor the piece was committed at
    pub position: Position,
    /// Rows the piece completed, ascending; already removed from the board
    pub cleared_rows: ArrayVec<usize, 4>,
}

impl ActivePiece {
    /// Create a piece at the spawn anchor in its spawn rotation
    pub fn new(kind: PieceKind) -> Self {
        Self::at(kind, Rotation::North, SPAWN_POSITION)
    }

    pub fn at(kind: PieceKind, rotation: Rotation, position: Position) -> Self {
        Self {
            kind,
            rotation,
            position,
        }
    }

    /// Catalog entry for the current rotation
    pub fn spec(&self) -> &'static PieceSpec {
        piece_spec(self.kind, self.rotation)
    }

    /// Get the cell offsets for the current rotation
    pub fn shape(&self) -> PieceShape {
        self.spec().cells
    }

    /// Check if every cell is free on the board
    pub fn fits(&self, board: &Board) -> bool {
        collision::fits(board, &self.shape(), self.position)
    }

    /// Check if the piece rests on the floor or the stack
    pub fn landed(&self, board: &Board) -> Result<bool, GridError> {
        let spec = self.spec();
        collision::has_landed(board, &spec.cells, spec.bottom, self.position)
    }

    /// Anchor row a quick drop would end on
    pub fn ghost_row(&self, board: &Board) -> Result<i32, GridError> {
        let spec = self.spec();
        collision::quickdrop_target_row(board, &spec.cells, spec.bottom, self.position)
    }

    pub fn move_left(&mut self, board: &Board) -> bool {
        let Some(left) = self.position.left() else {
            return false;
        };
        if collision::can_move_left(board, &self.shape(), self.position) {
            self.position = left;
            return true;
        }
        false
    }

    pub fn move_right(&mut self, board: &Board) -> bool {
        let Some(right) = self.position.right() else {
            return false;
        };
        if collision::can_move_right(board, &self.shape(), self.position) {
            self.position = right;
            return true;
        }
        false
    }

    /// Rotate with SRS wall kicks; false if every kick collides
    pub fn rotate(&mut self, board: &Board, clockwise: bool) -> bool {
        let rotated = try_rotate(self.kind, self.rotation, self.position, clockwise, |row, col| {
            board.is_free(row, col)
        });
        match rotated {
            Some(rotated) => {
                self.rotation = rotated.rotation;
                self.position = rotated.position;
                true
            }
            None => false,
        }
    }

    /// Move down one row unless the piece has landed
    ///
    /// Returns whether the piece moved.
    pub fn step_down(&mut self, board: &Board) -> Result<bool, GridError> {
        if self.landed(board)? {
            return Ok(false);
        }
        self.position = self.position.below().ok_or(GridError::RowOutOfBounds {
            row: self.position.row,
            col: self.position.col,
        })?;
        Ok(true)
    }

    /// Move straight down to the quick-drop row
    ///
    /// Returns the number of rows travelled.
    pub fn quick_drop(&mut self, board: &Board) -> Result<u32, GridError> {
        let target = self.ghost_row(board)?;
        if target <= self.position.row {
            return Ok(0);
        }
        let distance = target.abs_diff(self.position.row);
        self.position.row = target;
        Ok(distance)
    }

    /// Commit the piece where it is and remove the rows it completed
    ///
    /// Only rows covered by the piece are cleared; a full row elsewhere on
    /// the board is left in place.
    pub fn lock(self, board: &mut Board) -> Result<LockOutcome, GridError> {
        let shape = self.shape();
        collision::commit_piece(board, &shape, self.position)?;

        let cleared_rows = board.completed_rows(landing_rows(&shape, self.position));
        if !cleared_rows.is_empty() {
            board.clear_rows(&cleared_rows);
        }
        debug!(
            kind = self.kind.as_str(),
            row = self.position.row,
            col = self.position.col,
            cleared = cleared_rows.len(),
            "piece locked"
        );

        Ok(LockOutcome {
            position: self.position,
            cleared_rows,
        })
    }
}
