use crate::core::{Board, GridError};
use crate::piece::{ActivePiece, LockOutcome};
use crate::types::Rotation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    #[error("could not rotate to target rotation")]
    RotationBlocked,
    #[error("target column would place piece out of bounds")]
    ColOutOfBounds,
    #[error("could not move to target column due to collision")]
    ColBlocked,
    #[error(transparent)]
    Grid(#[from] GridError),
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::RotationBlocked | PlaceError::ColOutOfBounds | PlaceError::ColBlocked => {
                "invalid_place"
            }
            PlaceError::Grid(err) => err.code(),
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::RotationBlocked => "could not rotate to target rotation",
            PlaceError::ColOutOfBounds => "target column would place piece out of bounds",
            PlaceError::ColBlocked => "could not move to target column due to collision",
            PlaceError::Grid(err) => err.message(),
        }
    }
}

/// Rotate, shift, quick drop and lock `piece` in one go
///
/// The board is only modified by the final lock; any earlier failure leaves
/// it as it was.
pub fn apply_place(
    board: &mut Board,
    piece: ActivePiece,
    target_col: i32,
    target_rot: Rotation,
) -> Result<LockOutcome, PlaceError> {
    // Try CW/CCW plans including 180; keep shorter first.
    let cur = piece.rotation.index() as i32;
    let tgt = target_rot.index() as i32;
    let cw = (tgt - cur).rem_euclid(4) as u8;
    let ccw = (cur - tgt).rem_euclid(4) as u8;

    let mut plans: [(bool, u8); 2] = [(true, cw), (false, ccw)];
    if plans[1].1 < plans[0].1 {
        plans.swap(0, 1);
    }

    let mut rotated = None;
    for (is_cw, steps) in plans {
        let mut candidate = piece;
        if (0..steps).all(|_| candidate.rotate(board, is_cw)) {
            rotated = Some(candidate);
            break;
        }
    }
    let Some(mut active) = rotated else {
        return Err(PlaceError::RotationBlocked);
    };

    // Validate column bounds based on current shape.
    let shape = active.shape();
    let min_dx = shape.iter().map(|&(dx, _)| i32::from(dx)).min().unwrap_or(0);
    let max_dx = shape.iter().map(|&(dx, _)| i32::from(dx)).max().unwrap_or(0);
    if target_col + min_dx < 0 || target_col + max_dx >= board.cols() {
        return Err(PlaceError::ColOutOfBounds);
    }

    while active.position.col < target_col {
        if !active.move_right(board) {
            return Err(PlaceError::ColBlocked);
        }
    }
    while active.position.col > target_col {
        if !active.move_left(board) {
            return Err(PlaceError::ColBlocked);
        }
    }

    active.quick_drop(board)?;
    Ok(active.lock(board)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, PieceKind, Position};

    #[test]
    fn place_drops_and_locks() {
        let mut board = Board::new();
        let piece = ActivePiece::new(PieceKind::I);

        let outcome = apply_place(&mut board, piece, 0, Rotation::North).unwrap();
        // I north cells sit on row offset 1
        assert_eq!(outcome.position, Position::new(18, 0));
        assert!((0..4).all(|col| board.is_occupied(19, col)));
    }

    #[test]
    fn place_rejected_when_col_out_of_bounds() {
        let mut board = Board::new();
        let piece = ActivePiece::new(PieceKind::T);

        let err = apply_place(&mut board, piece, -50, Rotation::North).unwrap_err();
        assert_eq!(err, PlaceError::ColOutOfBounds);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn place_rejected_when_col_blocked_by_collision() {
        let mut board = Board::new();
        // Wall in column 1 across the spawn rows
        for row in 0..3 {
            board.set(row, 1, Cell::Occupied);
        }
        let piece = ActivePiece::new(PieceKind::O);

        let err = apply_place(&mut board, piece, 0, Rotation::North).unwrap_err();
        assert_eq!(err, PlaceError::ColBlocked);
        assert_eq!(err.code(), "invalid_place");
        assert_eq!(board.occupied_count(), 3);
    }

    #[test]
    fn place_rotates_the_short_way() {
        let mut board = Board::new();
        let piece = ActivePiece::new(PieceKind::T);

        let outcome = apply_place(&mut board, piece, 3, Rotation::West).unwrap();
        // T west: (0,1) (1,0) (1,1) (1,2); column 4 lands on the floor
        assert_eq!(outcome.position, Position::new(17, 3));
        assert!(board.is_occupied(19, 4));
        assert!(board.is_occupied(18, 3));
    }

    #[test]
    fn grid_errors_keep_their_code() {
        let err = PlaceError::from(GridError::NoBottomContacts);
        assert_eq!(err.code(), "no_bottom_contacts");
        assert_eq!(err.to_string(), "bottom contact set is empty");

        let err = PlaceError::from(GridError::RowOutOfBounds { row: -1, col: 4 });
        assert_eq!(err.to_string(), "piece cell row is outside the board (row -1, col 4)");
        assert!(std::error::Error::source(&err).is_none());
        assert_eq!(PlaceError::ColBlocked.to_string(), PlaceError::ColBlocked.message());
    }
}
