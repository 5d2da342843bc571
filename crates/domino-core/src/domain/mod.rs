//! Domain entities for domino label sheets.
//!
//! This module contains pure logic with no file, device or drawing
//! dependencies.  Everything here can be tested in isolation.
//!
//! The pieces fit together in pipeline order:
//!
//! ```text
//! catalog ──► sampler ──► grid (column-major fill)
//!                              │
//!                 layout ──────┴──► render
//! ```

/// The 8×2 dot pattern on one domino face.
pub mod pattern;

/// Enumeration of every distinguishable face.
pub mod catalog;

/// Random subset selection from the catalog.
pub mod sampler;

/// Page size and cell coordinates.
pub mod layout;

/// Column-major assignment of patterns to cells.
pub mod grid;
