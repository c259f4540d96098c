//! Collision engine tests: landing, quick drop and commit

use tetrazone::core::collision::{
    can_move_left, can_move_right, commit_piece, fits, has_landed, quickdrop_target_row,
};
use tetrazone::core::pieces::piece_spec;
use tetrazone::core::{Board, BoardFixture, GridError};
use tetrazone::types::{Cell, PieceKind, Position, Rotation};

const Z0_PIECE: [(i8, i8); 4] = [(0, 0), (1, 0), (1, 1), (2, 1)];
const Z0_BOTTOM: [usize; 3] = [0, 2, 3];

const Z1_PIECE: [(i8, i8); 4] = [(2, 0), (2, 1), (1, 1), (1, 2)];
const Z1_BOTTOM: [usize; 2] = [1, 3];

// ============== has_landed ==============

#[test]
fn test_landed_on_committed_piece() {
    let mut board = Board::new();
    commit_piece(&mut board, &Z0_PIECE, Position::new(18, 3)).unwrap();

    // Cells (18,3) (18,4) (19,4) (19,5)
    assert_eq!(board.occupied_count(), 4);
    assert!(board.is_occupied(19, 5));

    // Contact (0,0) of a Z at (17,4) sits right above (18,4)
    assert_eq!(
        has_landed(&board, &Z0_PIECE, &Z0_BOTTOM, Position::new(17, 4)),
        Ok(true)
    );
}

#[test]
fn test_not_landed_when_cells_below_are_empty() {
    let board = BoardFixture::FourTiles.build();
    // Z over columns 6-8, far from the tiles and the floor
    assert_eq!(
        has_landed(&board, &Z0_PIECE, &Z0_BOTTOM, Position::new(10, 6)),
        Ok(false)
    );
    // Directly above the 2x2 block the Z spawn rotation rests on it
    assert_eq!(
        has_landed(&board, &Z0_PIECE, &Z0_BOTTOM, Position::new(16, 2)),
        Ok(true)
    );
}

#[test]
fn test_floor_branch_on_exact_boundary() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        for rotation in Rotation::ALL {
            let spec = piece_spec(kind, rotation);
            let max_row = i32::from(spec.cells.iter().map(|&(_, row)| row).max().unwrap());
            // anchor.row + offset + 1 == rows for the lowest contact
            let anchor = Position::new(19 - max_row, 3);
            assert_eq!(
                has_landed(&board, &spec.cells, spec.bottom, anchor),
                Ok(true),
                "{:?} {:?}",
                kind,
                rotation
            );
            let above = Position::new(anchor.row - 1, 3);
            assert_eq!(
                has_landed(&board, &spec.cells, spec.bottom, above),
                Ok(false),
                "{:?} {:?}",
                kind,
                rotation
            );
        }
    }
}

#[test]
fn test_landed_rejects_empty_contacts() {
    let board = Board::new();
    assert_eq!(
        has_landed(&board, &Z0_PIECE, &[], Position::new(18, 3)),
        Err(GridError::NoBottomContacts)
    );
}

#[test]
fn test_landed_rejects_column_outside_board() {
    let board = Board::new();
    assert_eq!(
        has_landed(&board, &Z0_PIECE, &Z0_BOTTOM, Position::new(5, 8)),
        Err(GridError::ColumnOutOfBounds { row: 7, col: 10 })
    );
}

// ============== quickdrop_target_row ==============

#[test]
fn test_quickdrop_tile_outside_footprint() {
    let board = BoardFixture::OneTile.build();
    // Contacts sit over columns 5 and 4; the tile in column 3 is not in the way
    assert_eq!(
        quickdrop_target_row(&board, &Z1_PIECE, &Z1_BOTTOM, Position::new(0, 3)),
        Ok(17)
    );
}

#[test]
fn test_quickdrop_stops_above_tile() {
    let board = BoardFixture::OneTile.build();
    // Contact (1,2) now sits over column 3 and hits the tile at row 19
    assert_eq!(
        quickdrop_target_row(&board, &Z1_PIECE, &Z1_BOTTOM, Position::new(0, 2)),
        Ok(16)
    );
}

#[test]
fn test_quickdrop_board_with_hole() {
    let board = BoardFixture::WithHole.build();
    assert_eq!(
        quickdrop_target_row(&board, &Z1_PIECE, &Z1_BOTTOM, Position::new(0, 3)),
        Ok(16)
    );
    // Z spawn rotation over the 2x2 block
    let board = BoardFixture::FourTiles.build();
    assert_eq!(
        quickdrop_target_row(&board, &Z0_PIECE, &Z0_BOTTOM, Position::new(0, 3)),
        Ok(16)
    );
}

#[test]
fn test_quickdrop_empty_board_rests_on_floor() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        for rotation in Rotation::ALL {
            let spec = piece_spec(kind, rotation);
            let last = spec.cells[*spec.bottom.last().unwrap()];
            let width = spec.cells.iter().map(|&(col, _)| col).max().unwrap();
            for col in 0..(10 - i32::from(width)) {
                let row =
                    quickdrop_target_row(&board, &spec.cells, spec.bottom, Position::new(0, col));
                assert_eq!(row, Ok(19 - i32::from(last.1)), "{:?} {:?}", kind, rotation);
            }
        }
    }
}

#[test]
fn test_quickdrop_uses_floor_for_unobstructed_low_contact() {
    // J east: (2,0) is high, (1,2) is low. Only the high contact meets a tile.
    let mut board = Board::new();
    board.set(19, 5, Cell::Occupied);
    let spec = piece_spec(PieceKind::J, Rotation::East);

    let row = quickdrop_target_row(&board, &spec.cells, spec.bottom, Position::new(0, 3)).unwrap();
    // (2,0) could go to 18, but (1,2) reaches the floor at 17
    assert_eq!(row, 17);

    commit_piece(&mut board, &spec.cells, Position::new(row, 3)).unwrap();
    assert!(board.is_occupied(19, 4));
}

#[test]
fn test_quickdrop_rejects_empty_contacts() {
    let board = Board::new();
    assert_eq!(
        quickdrop_target_row(&board, &Z1_PIECE, &[], Position::new(0, 3)),
        Err(GridError::NoBottomContacts)
    );
}

#[test]
fn test_quickdrop_rejects_bad_contact_index() {
    let board = Board::new();
    assert_eq!(
        quickdrop_target_row(&board, &Z1_PIECE, &[1, 4], Position::new(0, 3)),
        Err(GridError::ContactIndexOutOfRange {
            index: 4,
            shape_len: 4
        })
    );
}

#[test]
fn test_quickdrop_rejects_column_outside_board() {
    let board = Board::new();
    assert_eq!(
        quickdrop_target_row(&board, &Z1_PIECE, &Z1_BOTTOM, Position::new(0, 8)),
        Err(GridError::ColumnOutOfBounds { row: 1, col: 10 })
    );
    assert_eq!(
        quickdrop_target_row(&board, &Z1_PIECE, &Z1_BOTTOM, Position::new(0, -2)),
        Err(GridError::ColumnOutOfBounds { row: 2, col: -1 })
    );
}

#[test]
fn test_anchor_at_i32_limit_is_an_error() {
    let mut board = Board::new();
    let anchor = Position::new(i32::MAX, 3);
    let row_err = GridError::RowOutOfBounds { row: i32::MAX, col: 3 };

    assert_eq!(has_landed(&board, &Z0_PIECE, &Z0_BOTTOM, anchor), Err(row_err));
    assert_eq!(quickdrop_target_row(&board, &Z0_PIECE, &Z0_BOTTOM, anchor), Err(row_err));
    assert_eq!(commit_piece(&mut board, &Z0_PIECE, anchor), Err(row_err));
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_quickdrop_then_commit_always_lands() {
    for fixture in BoardFixture::ALL {
        let board = fixture.build();
        for kind in PieceKind::ALL {
            for rotation in Rotation::ALL {
                let spec = piece_spec(kind, rotation);
                for col in -2..10 {
                    let anchor = Position::new(0, col);
                    if !fits(&board, &spec.cells, anchor) {
                        continue;
                    }
                    let row =
                        quickdrop_target_row(&board, &spec.cells, spec.bottom, anchor).unwrap();
                    let rest = Position::new(row, col);

                    assert!(fits(&board, &spec.cells, rest), "{:?} {:?} {:?}", fixture, kind, rotation);
                    assert_eq!(
                        has_landed(&board, &spec.cells, spec.bottom, rest),
                        Ok(true),
                        "{:?} {:?} {:?} col {}",
                        fixture,
                        kind,
                        rotation,
                        col
                    );

                    let mut after = board.clone();
                    commit_piece(&mut after, &spec.cells, rest).unwrap();
                    assert_eq!(after.occupied_count(), board.occupied_count() + 4);
                }
            }
        }
    }
}

// ============== commit_piece ==============

#[test]
fn test_commit_rejects_column_outside_board() {
    let mut board = Board::new();
    assert_eq!(
        commit_piece(&mut board, &Z0_PIECE, Position::new(5, -1)),
        Err(GridError::ColumnOutOfBounds { row: 5, col: -1 })
    );
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_commit_rejects_row_above_board() {
    let mut board = Board::new();
    assert_eq!(
        commit_piece(&mut board, &Z1_PIECE, Position::new(-1, 3)),
        Err(GridError::RowOutOfBounds { row: -1, col: 5 })
    );
    assert_eq!(board.occupied_count(), 0);
}

// ============== sideways moves ==============

#[test]
fn test_can_move_left_at_left_border() {
    let board = Board::new();
    let spec = piece_spec(PieceKind::T, Rotation::North);
    assert!(!can_move_left(&board, &spec.cells, Position::new(10, 0)));
    assert!(can_move_right(&board, &spec.cells, Position::new(10, 0)));
}

#[test]
fn test_can_move_right_blocked_by_stack() {
    let board = BoardFixture::WithHole.build();
    let spec = piece_spec(PieceKind::O, Rotation::North);
    // O over the hole at rows 17-18 would need (18,6) free to shift right
    assert!(!can_move_right(&board, &spec.cells, Position::new(17, 4)));
    assert!(can_move_right(&board, &spec.cells, Position::new(10, 4)));
    // Above the board only columns matter
    assert!(can_move_left(&board, &spec.cells, Position::new(-2, 4)));
}
