//! GenerateSheetUseCase: builds one printable sheet of unique dominoes.
//!
//! The use case wires the domain pieces together in a fixed order:
//!
//! 1. validate the grid geometry (so a bad layout is never discovered after
//!    sampling);
//! 2. sample `rows * columns` distinct patterns from the catalog;
//! 3. fill the grid column-major.
//!
//! The resulting [`Sheet`] can be rendered to any canvas, serialised to SVG,
//! or summarised as a [`SheetManifest`].

use domino_core::{
    render_sheet, sample, Canvas, Catalog, DotPattern, GeometryError, GridError, GridLayout,
    GridSpec, PlacementGrid, RenderError, SampleError, SvgCanvas, SvgDocument,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

/// Errors that can occur while generating a sheet.
#[derive(Debug, Error, PartialEq)]
pub enum SheetError {
    /// The grid parameters cannot produce a sheet.
    #[error("invalid sheet geometry: {0}")]
    Geometry(#[from] GeometryError),

    /// The sheet needs more distinct dominoes than exist.
    #[error(transparent)]
    Supply(#[from] SampleError),

    /// The sampled patterns could not fill the grid.
    #[error("grid fill failed: {0}")]
    Grid(#[from] GridError),

    /// The grid could not be drawn on the layout.
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
}

/// A generated sheet: identifier, geometry and placed patterns.
#[derive(Debug, Clone)]
pub struct Sheet {
    id: Uuid,
    layout: GridLayout,
    grid: PlacementGrid,
}

impl Sheet {
    /// Unique identifier of this sheet, recorded in its manifest.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn grid(&self) -> &PlacementGrid {
        &self.grid
    }

    /// Draws the sheet onto `canvas`.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Render`] if the grid and layout disagree, which
    /// cannot happen for sheets built by [`generate_sheet`].
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) -> Result<(), SheetError> {
        render_sheet(&self.layout, &self.grid, canvas)?;
        Ok(())
    }

    /// Renders the sheet into a new SVG document sized to the page.
    ///
    /// # Errors
    ///
    /// See [`Sheet::render`].
    pub fn to_svg(&self) -> Result<SvgDocument, SheetError> {
        let mut canvas = SvgCanvas::new(self.layout.width(), self.layout.height());
        self.render(&mut canvas)?;
        Ok(canvas.finish())
    }

    /// Summarises the sheet for record keeping.
    pub fn manifest(&self) -> SheetManifest {
        let spec = self.layout.spec();
        SheetManifest {
            sheet_id: self.id,
            rows: spec.rows,
            columns: spec.columns,
            width_mm: self.layout.width(),
            height_mm: self.layout.height(),
            padding_mm: spec.padding,
            row_spacing_mm: spec.row_spacing,
            column_spacing_mm: spec.column_spacing,
            patterns: self.grid.columns().to_vec(),
        }
    }
}

/// Serialisable description of a generated sheet.
///
/// `patterns[c][r]` is the pattern printed in column `c`, row `r`, written as
/// 16 `0`/`1` characters (top row first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetManifest {
    pub sheet_id: Uuid,
    pub rows: usize,
    pub columns: usize,
    pub width_mm: f64,
    pub height_mm: f64,
    pub padding_mm: f64,
    pub row_spacing_mm: f64,
    pub column_spacing_mm: f64,
    pub patterns: Vec<Vec<DotPattern>>,
}

/// Generates a sheet of `spec.rows * spec.columns` distinct dominoes.
///
/// # Errors
///
/// - [`SheetError::Geometry`] for invalid grid parameters, checked first.
/// - [`SheetError::Supply`] if the catalog is too small for the grid,
///   including grids whose cell count overflows `usize`.
pub fn generate_sheet<R>(catalog: &Catalog, spec: GridSpec, rng: &mut R) -> Result<Sheet, SheetError>
where
    R: Rng + ?Sized,
{
    let layout = GridLayout::new(spec)?;
    // A product too large for `usize` is still more than the catalog holds.
    let requested = spec
        .cell_count()
        .ok_or(SampleError::InsufficientSupply {
            requested: usize::MAX,
            available: catalog.len(),
        })?;
    let patterns = sample(catalog, requested, rng)?;
    let grid = PlacementGrid::fill(spec.rows, spec.columns, patterns)?;

    let sheet = Sheet {
        id: Uuid::new_v4(),
        layout,
        grid,
    };
    info!(
        sheet_id = %sheet.id,
        rows = spec.rows,
        columns = spec.columns,
        width_mm = layout.width(),
        height_mm = layout.height(),
        "generated domino sheet"
    );
    Ok(sheet)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
