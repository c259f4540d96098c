//! Core grid logic - pure, deterministic, and testable
//!
//! This crate holds the board, the shape catalog and the collision queries.
//! It has **no dependencies** on rendering, input, timing or I/O, making it:
//!
//! - **Deterministic**: every query is a pure function of the board it is given
//! - **Testable**: boards are plain values, so tests build as many as they like
//! - **Portable**: runs in the game loop, the replay tool or a benchmark
//! - **Fast**: zero-allocation query paths over a flat cell array
//!
//! # Module Structure
//!
//! - [`board`]: 20x10 board with bounds-checked accessors and row clearing
//! - [`collision`]: landing test, quick-drop target row, commit, move checks
//! - [`pieces`]: shape catalog with bottom-contact sets, SRS wall kicks
//! - [`fixtures`]: named board layouts
//! - [`error`]: precondition failures
//!
//! # Example
//!
//! ```
//! use tetrazone_core::{collision, pieces, Board};
//! use tetrazone_core::types::{PieceKind, Position, Rotation};
//!
//! let mut board = Board::new();
//! let spec = pieces::piece_spec(PieceKind::Z, Rotation::North);
//! let anchor = Position::new(0, 3);
//!
//! // Hard drop: find the resting row, then write the piece there
//! let row = collision::quickdrop_target_row(&board, &spec.cells, spec.bottom, anchor).unwrap();
//! let rest = Position::new(row, anchor.col);
//! collision::commit_piece(&mut board, &spec.cells, rest).unwrap();
//!
//! assert_eq!(row, 18);
//! assert!(board.is_occupied(19, 5));
//! ```

pub mod board;
pub mod collision;
pub mod error;
pub mod fixtures;
pub mod pieces;

pub use tetrazone_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::{commit_piece, has_landed, quickdrop_target_row};
pub use error::GridError;
pub use fixtures::BoardFixture;
pub use pieces::{bottom_contacts, get_shape, piece_spec, try_rotate, PieceShape, PieceSpec};
