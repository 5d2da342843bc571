//! Application layer: use cases that combine domain services.

/// Sample, lay out and render one sheet of dominoes.
pub mod generate_sheet;
