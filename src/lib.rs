//! Tetrazone grid engine (workspace facade crate).
//!
//! Re-exports the workspace crates under stable names and hosts the pieces
//! that only the tooling needs: board snapshots and the drop replay used by
//! the `tetrazone` binary.

pub use tetrazone_core as core;
pub use tetrazone_engine as engine;
pub use tetrazone_types as types;

pub mod replay;
pub mod snapshot;
