//! Pieces module - shape catalog and SRS wall kicks
//!
//! Every piece kind has four rotations. Each rotation is described once, here,
//! by its four cell offsets and its bottom-contact indices: the cells that are
//! the lowest of their column within the shape. Landing and quick-drop only
//! look below those cells, so the contact sets are part of the static data and
//! are never derived at query time.
//!
//! Offsets are `(col, row)` relative to the piece anchor. Within every entry
//! the last bottom contact has the largest row offset.
//!
//! Wall kicks follow the Super Rotation System. Reference: https://tetris.wiki/SRS

use tracing::trace;

use crate::types::{MinoOffset, PieceKind, Position, Rotation};

/// Shape of a piece - 4 cell offsets from the anchor
pub type PieceShape = [MinoOffset; 4];

/// One rotation of one piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSpec {
    pub cells: PieceShape,
    /// Indices into `cells` of the lowest cell of each column
    pub bottom: &'static [usize],
}

const fn spec(cells: PieceShape, bottom: &'static [usize]) -> PieceSpec {
    PieceSpec { cells, bottom }
}

/// Shape table indexed by `[PieceKind::index()][Rotation::index()]`
static PIECE_SPECS: [[PieceSpec; 4]; 7] = [
    // I
    [
        spec([(0, 1), (1, 1), (2, 1), (3, 1)], &[0, 1, 2, 3]),
        spec([(2, 0), (2, 1), (2, 2), (2, 3)], &[3]),
        spec([(0, 2), (1, 2), (2, 2), (3, 2)], &[0, 1, 2, 3]),
        spec([(1, 0), (1, 1), (1, 2), (1, 3)], &[3]),
    ],
    // J
    [
        spec([(0, 0), (0, 1), (1, 1), (2, 1)], &[1, 2, 3]),
        spec([(1, 0), (1, 1), (2, 0), (1, 2)], &[2, 3]),
        spec([(0, 1), (1, 1), (2, 1), (2, 2)], &[0, 1, 3]),
        spec([(0, 2), (1, 0), (1, 1), (1, 2)], &[0, 3]),
    ],
    // L
    [
        spec([(2, 0), (0, 1), (1, 1), (2, 1)], &[1, 2, 3]),
        spec([(1, 0), (1, 1), (1, 2), (2, 2)], &[2, 3]),
        spec([(0, 1), (1, 1), (2, 1), (0, 2)], &[1, 2, 3]),
        spec([(0, 0), (1, 0), (1, 1), (1, 2)], &[0, 3]),
    ],
    // O: anchored at its top-left cell in every rotation
    [
        spec([(0, 0), (1, 0), (0, 1), (1, 1)], &[2, 3]),
        spec([(0, 0), (1, 0), (0, 1), (1, 1)], &[2, 3]),
        spec([(0, 0), (1, 0), (0, 1), (1, 1)], &[2, 3]),
        spec([(0, 0), (1, 0), (0, 1), (1, 1)], &[2, 3]),
    ],
    // S
    [
        spec([(1, 0), (2, 0), (0, 1), (1, 1)], &[1, 2, 3]),
        spec([(1, 0), (1, 1), (2, 1), (2, 2)], &[1, 3]),
        spec([(1, 1), (2, 1), (0, 2), (1, 2)], &[1, 2, 3]),
        spec([(0, 0), (0, 1), (1, 1), (1, 2)], &[1, 3]),
    ],
    // T
    [
        spec([(1, 0), (0, 1), (1, 1), (2, 1)], &[1, 2, 3]),
        spec([(1, 0), (1, 1), (2, 1), (1, 2)], &[2, 3]),
        spec([(0, 1), (1, 1), (2, 1), (1, 2)], &[0, 2, 3]),
        spec([(0, 1), (1, 0), (1, 1), (1, 2)], &[0, 3]),
    ],
    // Z
    [
        spec([(0, 0), (1, 0), (1, 1), (2, 1)], &[0, 2, 3]),
        spec([(2, 0), (2, 1), (1, 1), (1, 2)], &[1, 3]),
        spec([(0, 1), (1, 1), (1, 2), (2, 2)], &[0, 2, 3]),
        spec([(1, 0), (1, 1), (0, 1), (0, 2)], &[1, 3]),
    ],
];

/// Catalog entry for a piece kind and rotation
pub fn piece_spec(kind: PieceKind, rotation: Rotation) -> &'static PieceSpec {
    &PIECE_SPECS[kind.index()][rotation.index()]
}

/// Get the shape (cell offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    piece_spec(kind, rotation).cells
}

/// Get the bottom-contact indices for a piece kind and rotation
pub fn bottom_contacts(kind: PieceKind, rotation: Rotation) -> &'static [usize] {
    piece_spec(kind, rotation).bottom
}

/// Compute the bottom-contact indices of an arbitrary shape
///
/// For every column of the footprint the index of its lowest cell, in
/// ascending index order. The catalog is checked against this in tests;
/// the collision queries always take the precomputed sets.
///
/// # Examples
///
/// ```
/// use tetrazone_core::pieces::derive_bottom_contacts;
///
/// // Z, spawn rotation
/// assert_eq!(derive_bottom_contacts(&[(0, 0), (1, 0), (1, 1), (2, 1)]), vec![0, 2, 3]);
/// ```
pub fn derive_bottom_contacts(shape: &[MinoOffset]) -> Vec<usize> {
    let mut contacts: Vec<usize> = Vec::with_capacity(shape.len());
    for (i, &(col, row)) in shape.iter().enumerate() {
        match contacts.iter().position(|&j| shape[j].0 == col) {
            Some(slot) if shape[contacts[slot]].1 < row => contacts[slot] = i,
            Some(_) => {}
            None => contacts.push(i),
        }
    }
    contacts.sort_unstable();
    contacts
}

/// SRS wall kick data
/// Each entry is (dx, dy) with y pointing up, tried in order
pub type KickTable = [[(i8, i8); 5]; 8];

/// Get kick table for a piece kind
/// Returns table indexed by [`get_kick_index`]
pub fn get_kick_table(kind: PieceKind) -> &'static KickTable {
    match kind {
        PieceKind::O => &O_KICKS,
        PieceKind::I => &I_KICKS,
        _ => &JLSTZ_KICKS,
    }
}

/// O piece has no kicks (always returns 0,0)
const O_KICKS: KickTable = [[(0, 0); 5]; 8];

/// JLSTZ kick table (shared by J, L, S, T, Z)
const JLSTZ_KICKS: KickTable = [
    // 0->1 (N->E, clockwise)
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 0->3 (N->W, counter-clockwise)
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 1->0 (E->N, counter-clockwise)
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 1->2 (E->S, clockwise)
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 2->1 (S->E, counter-clockwise)
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 2->3 (S->W, clockwise)
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 3->2 (W->S, counter-clockwise)
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 3->0 (W->N, clockwise)
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
];

/// I piece kick table
const I_KICKS: KickTable = [
    // 0->1 (N->E)
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // 0->3 (N->W)
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // 1->0 (E->N)
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // 1->2 (E->S)
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // 2->1 (S->E)
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // 2->3 (S->W)
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // 3->2 (W->S)
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // 3->0 (W->N)
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
];

/// Get the kick index for a rotation transition
pub fn get_kick_index(from: Rotation, clockwise: bool) -> usize {
    match (from, clockwise) {
        (Rotation::North, true) => 0,  // N->E
        (Rotation::North, false) => 1, // N->W
        (Rotation::East, false) => 2,  // E->N
        (Rotation::East, true) => 3,   // E->S
        (Rotation::South, false) => 4, // S->E
        (Rotation::South, true) => 5,  // S->W
        (Rotation::West, false) => 6,  // W->S
        (Rotation::West, true) => 7,   // W->N
    }
}

/// Outcome of a successful rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotated {
    pub shape: PieceShape,
    pub rotation: Rotation,
    pub position: Position,
    /// The kick that was applied, in table units (y up)
    pub kick: (i8, i8),
}

/// Try to rotate a piece with wall kicks
///
/// `is_free(row, col)` decides whether a single cell may be occupied by the
/// piece; usually [`Board::is_free`](crate::Board::is_free).
/// Returns `None` if all kicks fail.
pub fn try_rotate(
    kind: PieceKind,
    rotation: Rotation,
    position: Position,
    clockwise: bool,
    is_free: impl Fn(i32, i32) -> bool,
) -> Option<Rotated> {
    let new_rotation = if clockwise {
        rotation.rotate_cw()
    } else {
        rotation.rotate_ccw()
    };

    let new_shape = get_shape(kind, new_rotation);
    let kicks = &get_kick_table(kind)[get_kick_index(rotation, clockwise)];

    for &(dx, dy) in kicks.iter() {
        // Kick rows point up, board rows point down
        let (Some(row), Some(col)) = (
            position.row.checked_sub(i32::from(dy)),
            position.col.checked_add(i32::from(dx)),
        ) else {
            continue;
        };
        let kicked = Position::new(row, col);

        let valid = new_shape.iter().all(|&offset| {
            kicked
                .offset(offset)
                .is_some_and(|cell| is_free(cell.row, cell.col))
        });

        if valid {
            trace!(?kind, from = ?rotation, to = ?new_rotation, dx, dy, "rotation accepted");
            return Some(Rotated {
                shape: new_shape,
                rotation: new_rotation,
                position: kicked,
                kick: (dx, dy),
            });
        }
    }

    None
}
