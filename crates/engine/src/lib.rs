//! Piece driver on top of the grid engine.
//!
//! [`ActivePiece`] sequences the core queries for one falling piece: shifting,
//! rotating with wall kicks, stepping down, quick dropping and locking into a
//! caller-owned board. [`place::apply_place`] runs a whole placement (rotate,
//! shift, drop, lock) in one call. Timing, input and scoring stay with the
//! caller.

pub mod piece;
pub mod place;

pub use tetrazone_core as core;
pub use tetrazone_types as types;

pub use piece::{ActivePiece, LockOutcome};
pub use place::{apply_place, PlaceError};
