//! Precondition failures reported by the grid queries.
//!
//! None of these are transient: each one means the caller handed the engine a
//! piece position or contact table that cannot exist in a correct game. They
//! are returned at the call site instead of being folded into a default answer.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// `has_landed`/`quickdrop_target_row` was called with no contact cells.
    #[error("bottom contact set is empty")]
    NoBottomContacts,
    /// A bottom-contact index does not address a cell of the shape.
    #[error("bottom contact index does not address a shape cell (index {index}, shape has {shape_len} cells)")]
    ContactIndexOutOfRange { index: usize, shape_len: usize },
    /// A piece cell addresses a column outside the board.
    #[error("piece cell column is outside the board (row {row}, col {col})")]
    ColumnOutOfBounds { row: i32, col: i32 },
    /// A piece cell addresses a row outside the board where one is required,
    /// or a row that cannot be represented at all.
    #[error("piece cell row is outside the board (row {row}, col {col})")]
    RowOutOfBounds { row: i32, col: i32 },
    /// Text board input had the wrong dimensions; `cols` is the width of the
    /// first bad row, or of the last row when only the row count is off.
    #[error("board text has the wrong dimensions ({rows} rows, {cols} cols)")]
    MalformedBoard { rows: usize, cols: usize },
}

impl GridError {
    pub fn code(self) -> &'static str {
        match self {
            GridError::NoBottomContacts => "no_bottom_contacts",
            GridError::ContactIndexOutOfRange { .. } => "contact_index_out_of_range",
            GridError::ColumnOutOfBounds { .. } | GridError::RowOutOfBounds { .. } => {
                "cell_out_of_bounds"
            }
            GridError::MalformedBoard { .. } => "malformed_board",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            GridError::NoBottomContacts => "bottom contact set is empty",
            GridError::ContactIndexOutOfRange { .. } => {
                "bottom contact index does not address a shape cell"
            }
            GridError::ColumnOutOfBounds { .. } => "piece cell column is outside the board",
            GridError::RowOutOfBounds { .. } => "piece cell row is outside the board",
            GridError::MalformedBoard { .. } => "board text has the wrong dimensions",
        }
    }
}
