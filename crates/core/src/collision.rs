//! Grid collision engine
//!
//! Stateless queries over a caller-owned [`Board`]: has a piece landed, where
//! would a quick drop put it, and writing a landed piece into the board.
//!
//! A piece is given as its cell offsets plus the indices of its bottom-contact
//! cells (see [`crate::pieces`]). Only the contacts are examined when looking
//! downwards: any other cell has a contact below it in the same column, so it
//! can never be the first to touch anything.
//!
//! Bad input is a caller bug. Columns outside the board, contact indices that
//! miss the shape, empty contact sets and anchors whose cells cannot be
//! addressed in `i32` are reported as [`GridError`] at the call site and
//! never folded into a `false` or a clamped row.

use arrayvec::ArrayVec;
use tracing::{debug, trace};

use crate::board::Board;
use crate::error::GridError;
use crate::pieces::PieceShape;
use crate::types::{Cell, MinoOffset, Position};

fn contact_offset(shape: &[MinoOffset], index: usize) -> Result<MinoOffset, GridError> {
    shape
        .get(index)
        .copied()
        .ok_or(GridError::ContactIndexOutOfRange {
            index,
            shape_len: shape.len(),
        })
}

/// Board cell of the piece cell at `offset`
///
/// An anchor so far off the board that the cell cannot be addressed is
/// reported against the axis that overflowed.
fn cell_at(anchor: Position, offset: MinoOffset) -> Result<Position, GridError> {
    anchor.offset(offset).ok_or_else(|| {
        if anchor.row.checked_add(i32::from(offset.1)).is_none() {
            GridError::RowOutOfBounds {
                row: anchor.row,
                col: anchor.col,
            }
        } else {
            GridError::ColumnOutOfBounds {
                row: anchor.row,
                col: anchor.col,
            }
        }
    })
}

fn check_column(board: &Board, cell: Position) -> Result<(), GridError> {
    if cell.col < 0 || cell.col >= board.cols() {
        return Err(GridError::ColumnOutOfBounds {
            row: cell.row,
            col: cell.col,
        });
    }
    Ok(())
}

/// Has the piece at `anchor` come to rest?
///
/// True as soon as one bottom contact has the floor or an occupied cell
/// directly below it; the remaining contacts are not looked at. Rows above
/// the board count as open space.
///
/// An empty `bottom_contacts` is rejected with
/// [`GridError::NoBottomContacts`]: with nothing to check the answer would
/// always be "not landed".
///
/// # Examples
///
/// ```
/// use tetrazone_core::{collision, Board};
/// use tetrazone_core::types::Position;
///
/// let board = Board::new();
/// let z = [(0, 0), (1, 0), (1, 1), (2, 1)];
///
/// assert!(!collision::has_landed(&board, &z, &[0, 2, 3], Position::new(17, 3)).unwrap());
/// assert!(collision::has_landed(&board, &z, &[0, 2, 3], Position::new(18, 3)).unwrap());
/// ```
pub fn has_landed(
    board: &Board,
    shape: &[MinoOffset],
    bottom_contacts: &[usize],
    anchor: Position,
) -> Result<bool, GridError> {
    if bottom_contacts.is_empty() {
        return Err(GridError::NoBottomContacts);
    }

    for &index in bottom_contacts {
        let cell = cell_at(anchor, contact_offset(shape, index)?)?;
        let below = cell.below().ok_or(GridError::RowOutOfBounds {
            row: cell.row,
            col: cell.col,
        })?;
        check_column(board, below)?;

        // Floor reached
        if below.row >= board.rows() {
            return Ok(true);
        }
        // Resting on the stack
        if board.is_occupied(below.row, below.col) {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Write the piece into the board as occupied cells
///
/// All cells are bounds-checked before anything is written, so on error the
/// board is unchanged. Callers are expected to commit only positions they
/// have already validated; an error here means that validation was skipped.
pub fn commit_piece(
    board: &mut Board,
    shape: &[MinoOffset],
    anchor: Position,
) -> Result<(), GridError> {
    for &offset in shape {
        let cell = cell_at(anchor, offset)?;
        check_column(board, cell)?;
        if cell.row < 0 || cell.row >= board.rows() {
            return Err(GridError::RowOutOfBounds {
                row: cell.row,
                col: cell.col,
            });
        }
    }

    for &offset in shape {
        let cell = cell_at(anchor, offset)?;
        board.set(cell.row, cell.col, Cell::Occupied);
    }

    debug!(row = anchor.row, col = anchor.col, cells = shape.len(), "piece committed");
    Ok(())
}

/// Lowest anchor row the piece reaches when dropped straight down
///
/// Each bottom contact scans its column from its current row to the floor.
/// The first occupied cell at row `r` lets the contact come down to
/// `r - 1 - row_offset`; a clear column lets it reach the floor at
/// `rows - 1 - row_offset`. The answer is the smallest of those rows, since
/// the piece stops when its first contact does. Ties keep the earlier
/// contact's row, which is the same number.
///
/// On a clear board this is `rows - 1` minus the largest contact row offset,
/// i.e. the offset of the last contact for every catalog entry.
///
/// # Examples
///
/// ```
/// use tetrazone_core::{collision, Board};
/// use tetrazone_core::types::{Cell, Position};
///
/// let mut board = Board::new();
/// board.set(19, 3, Cell::Occupied);
///
/// // Z in its vertical rotation; its (1, 2) cell drops onto the tile at column 3
/// let z = [(2, 0), (2, 1), (1, 1), (1, 2)];
/// let row = collision::quickdrop_target_row(&board, &z, &[1, 3], Position::new(0, 2)).unwrap();
/// assert_eq!(row, 16);
/// ```
pub fn quickdrop_target_row(
    board: &Board,
    shape: &[MinoOffset],
    bottom_contacts: &[usize],
    anchor: Position,
) -> Result<i32, GridError> {
    if bottom_contacts.is_empty() {
        return Err(GridError::NoBottomContacts);
    }

    let rows = board.rows();
    let mut min_row = i32::MAX;

    for &index in bottom_contacts {
        let offset = contact_offset(shape, index)?;
        let start = cell_at(anchor, offset)?;
        check_column(board, start)?;

        let row_offset = i32::from(offset.1);
        let obstruction = (start.row.max(0)..rows).find(|&row| board.is_occupied(row, start.col));
        let candidate = match obstruction {
            Some(row) => row - 1 - row_offset,
            None => rows - 1 - row_offset,
        };
        trace!(index, col = start.col, ?obstruction, candidate, "quickdrop contact");

        if candidate < min_row {
            min_row = candidate;
        }
    }

    Ok(min_row)
}

/// Does every cell of the piece sit on a free cell at `anchor`?
pub fn fits(board: &Board, shape: &[MinoOffset], anchor: Position) -> bool {
    shape.iter().all(|&offset| {
        anchor
            .offset(offset)
            .is_some_and(|cell| board.is_free(cell.row, cell.col))
    })
}

/// Can the piece shift one column to the left?
pub fn can_move_left(board: &Board, shape: &[MinoOffset], anchor: Position) -> bool {
    anchor.left().is_some_and(|left| fits(board, shape, left))
}

/// Can the piece shift one column to the right?
pub fn can_move_right(board: &Board, shape: &[MinoOffset], anchor: Position) -> bool {
    anchor.right().is_some_and(|right| fits(board, shape, right))
}

/// Distinct board rows covered by the piece at `anchor`, ascending
///
/// These are the only rows a commit at `anchor` can complete.
pub fn landing_rows(shape: &PieceShape, anchor: Position) -> ArrayVec<i32, 4> {
    let mut rows: ArrayVec<i32, 4> = ArrayVec::new();
    for cell in shape.iter().filter_map(|&offset| anchor.offset(offset)) {
        if !rows.contains(&cell.row) {
            rows.push(cell.row);
        }
    }
    rows.sort_unstable();
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    const Z0: PieceShape = [(0, 0), (1, 0), (1, 1), (2, 1)];
    const Z0_BOTTOM: [usize; 3] = [0, 2, 3];

    #[test]
    fn test_floor_branch_without_occupied_cells() {
        let board = Board::new();
        // (1, 1) and (2, 1) sit on row 19
        assert_eq!(has_landed(&board, &Z0, &Z0_BOTTOM, Position::new(18, 3)), Ok(true));
        assert_eq!(has_landed(&board, &Z0, &Z0_BOTTOM, Position::new(17, 3)), Ok(false));
    }

    #[test]
    fn test_has_landed_short_circuits_on_first_contact() {
        let mut board = Board::new();
        board.set(6, 3, Cell::Occupied);

        // contact 0 lands; the bad index after it is never reached
        assert_eq!(has_landed(&board, &Z0, &[0, 9], Position::new(5, 3)), Ok(true));
        assert_eq!(
            has_landed(&board, &Z0, &[9, 0], Position::new(5, 3)),
            Err(GridError::ContactIndexOutOfRange {
                index: 9,
                shape_len: 4
            })
        );
    }

    #[test]
    fn test_rows_above_board_are_open() {
        let board = Board::new();
        assert_eq!(has_landed(&board, &Z0, &Z0_BOTTOM, Position::new(-3, 0)), Ok(false));
        assert_eq!(
            quickdrop_target_row(&board, &Z0, &Z0_BOTTOM, Position::new(-3, 0)),
            Ok(18)
        );
    }

    #[test]
    fn test_extreme_anchors_are_errors() {
        let board = Board::new();
        let anchor = Position::new(i32::MAX, 3);
        let row_err = GridError::RowOutOfBounds { row: i32::MAX, col: 3 };

        assert_eq!(has_landed(&board, &Z0, &Z0_BOTTOM, anchor), Err(row_err));
        assert_eq!(quickdrop_target_row(&board, &Z0, &Z0_BOTTOM, anchor), Err(row_err));
        assert!(!fits(&board, &Z0, anchor));

        let far_right = Position::new(0, i32::MAX);
        assert_eq!(
            has_landed(&board, &Z0, &[3], far_right),
            Err(GridError::ColumnOutOfBounds { row: 0, col: i32::MAX })
        );
        assert!(!can_move_right(&board, &Z0, far_right));
        assert!(!can_move_left(&board, &Z0, Position::new(0, i32::MIN)));
    }

    #[test]
    fn test_commit_rejects_before_writing() {
        let mut board = Board::new();
        let result = commit_piece(&mut board, &Z0, Position::new(19, 3));
        assert_eq!(result, Err(GridError::RowOutOfBounds { row: 20, col: 4 }));
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_landing_rows_are_distinct_and_sorted() {
        let rows = landing_rows(&[(1, 2), (1, 0), (2, 0), (1, 1)], Position::new(10, 0));
        assert_eq!(rows.as_slice(), &[10, 11, 12]);
    }
}
