//! # domino-core
//!
//! Pattern generation, sheet layout and rendering for printable domino
//! labels.
//!
//! This crate has no dependencies on files, devices or drawing libraries.
//! Output goes through the [`render::Canvas`] trait and printing through the
//! [`print::PrintTransport`] trait, so every piece can be exercised in tests.
//!
//! # Overview (for beginners)
//!
//! A domino label shows 8×2 dot slots.  Ten slots hold a dot, and the four
//! row ends always do.  Because a physical domino can be turned around, a
//! face and its 180° rotation count as the same domino, and faces that look
//! identical after turning are excluded altogether.
//!
//! - **`domain`** – The pure logic.  [`Catalog`] enumerates every
//!   distinguishable face, [`sample`] picks a random subset,
//!   [`PlacementGrid`] assigns them column-major to cells, and
//!   [`GridLayout`] computes where each cell sits on the page.
//!
//! - **`render`** – Turns placed patterns into rounded rectangles and circles,
//!   and writes them as SVG.
//!
//! - **`print`** – The boundary to the external rasterizer and label printer.

pub mod domain;
pub mod print;
pub mod render;

// Re-export the most-used types at the crate root so callers can write
// `domino_core::Catalog` instead of `domino_core::domain::catalog::Catalog`.
pub use domain::catalog::{Catalog, CatalogError, CatalogRules};
pub use domain::grid::{GridError, Placement, PlacementGrid};
pub use domain::layout::{calculate_columns, GeometryError, GridLayout, GridSpec, Point};
pub use domain::pattern::{DotPattern, PatternParseError};
pub use domain::sampler::{sample, SampleError};
pub use print::{LabelPrinter, PrintError, PrintTransport, RasterImage, Rasterizer};
pub use render::svg::{SvgCanvas, SvgDocument};
pub use render::{render_sheet, Canvas, RenderError};
