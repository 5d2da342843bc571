//! Sheet geometry: page size and the position of every domino cell.
//!
//! All values are physical millimetres.  The sheet origin (0, 0) is the
//! top-left corner of the page; x grows to the right and y grows downwards,
//! matching SVG user space.
//!
//! ```text
//!  padding
//!  ┌──────────────────────────────────────────────┐
//!  │  ┌────────┐ col_spacing ┌────────┐           │
//!  │  │ (0, 0) │             │ (1, 0) │           │
//!  │  └────────┘             └────────┘           │
//!  │  row_spacing                                 │
//!  │  ┌────────┐             ┌────────┐           │
//!  │  │ (0, 1) │             │ (1, 1) │           │
//!  │  └────────┘             └────────┘           │
//!  └──────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Width of one domino label.
pub const DOMINO_WIDTH_MM: f64 = 43.18;
/// Height of one domino label.
pub const DOMINO_HEIGHT_MM: f64 = 12.7;
/// Corner radius of the rounded domino rectangle.
pub const DOMINO_CORNER_RADIUS_MM: f64 = 2.54;
/// Diameter of one dot.
pub const DOT_DIAMETER_MM: f64 = 2.54;
/// Centre-to-centre distance between neighbouring dots.
pub const DOT_SPACING_MM: f64 = 5.08;

/// Errors raised for grid parameters that cannot produce a sheet.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    /// A sheet needs at least one row.
    #[error("rows must be at least 1")]
    ZeroRows,

    /// A sheet needs at least one column.
    #[error("columns must be at least 1")]
    ZeroColumns,

    /// A length parameter is negative, NaN or infinite.
    #[error("{name} must be a finite, non-negative length in mm, got {value}")]
    InvalidLength { name: &'static str, value: f64 },
}

/// A position on the sheet in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Caller-supplied grid parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Dominoes per column.
    pub rows: usize,
    /// Dominoes per row.
    pub columns: usize,
    /// Blank margin around the whole grid.
    pub padding: f64,
    /// Vertical gap between neighbouring rows.
    pub row_spacing: f64,
    /// Horizontal gap between neighbouring columns.
    pub column_spacing: f64,
}

impl GridSpec {
    /// Number of cells in the grid, or `None` if `rows * columns` overflows.
    pub fn cell_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }

    /// Checks that the parameters describe a sheet with positive dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] for zero rows or columns and for negative or
    /// non-finite lengths.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.rows == 0 {
            return Err(GeometryError::ZeroRows);
        }
        if self.columns == 0 {
            return Err(GeometryError::ZeroColumns);
        }
        check_length("padding", self.padding)?;
        check_length("row_spacing", self.row_spacing)?;
        check_length("column_spacing", self.column_spacing)?;
        Ok(())
    }
}

fn check_length(name: &'static str, value: f64) -> Result<(), GeometryError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidLength { name, value })
    }
}

/// Validated sheet geometry.
///
/// Construction goes through [`GridLayout::new`], so every instance is known
/// to have at least one cell and a positive page size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    spec: GridSpec,
}

impl GridLayout {
    /// Validates `spec` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] if the parameters are rejected by
    /// [`GridSpec::validate`].
    pub fn new(spec: GridSpec) -> Result<Self, GeometryError> {
        spec.validate()?;
        Ok(Self { spec })
    }

    /// The parameters this layout was built from.
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn rows(&self) -> usize {
        self.spec.rows
    }

    pub fn columns(&self) -> usize {
        self.spec.columns
    }

    /// Total page width: padding on both sides, the dominoes and the gaps
    /// between columns.
    pub fn width(&self) -> f64 {
        let s = &self.spec;
        2.0 * s.padding
            + s.columns as f64 * DOMINO_WIDTH_MM
            + (s.columns - 1) as f64 * s.column_spacing
    }

    /// Total page height: padding on both sides, the dominoes and the gaps
    /// between rows.
    pub fn height(&self) -> f64 {
        let s = &self.spec;
        2.0 * s.padding + s.rows as f64 * DOMINO_HEIGHT_MM + (s.rows - 1) as f64 * s.row_spacing
    }

    /// Top-left corner of the cell at (`column`, `row`).
    ///
    /// Returns `None` if the cell lies outside the grid.
    pub fn cell_offset(&self, column: usize, row: usize) -> Option<Point> {
        if column >= self.spec.columns || row >= self.spec.rows {
            return None;
        }
        let s = &self.spec;
        Some(Point {
            x: s.padding + column as f64 * (DOMINO_WIDTH_MM + s.column_spacing),
            y: s.padding + row as f64 * (DOMINO_HEIGHT_MM + s.row_spacing),
        })
    }
}

/// How many columns of dominoes fit on a label of the given length.
///
/// Computes `floor((length - 2 * padding) / (DOMINO_WIDTH_MM + column_spacing))`
/// and saturates at zero when the padding alone uses up the length.  The
/// trailing column gap is counted, so the result is conservative by at most
/// one column's spacing.
pub fn calculate_columns(length: f64, padding: f64, column_spacing: f64) -> usize {
    let usable = length - 2.0 * padding;
    let pitch = DOMINO_WIDTH_MM + column_spacing;
    if !usable.is_finite() || usable <= 0.0 || pitch <= 0.0 {
        return 0;
    }
    (usable / pitch).floor() as usize
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn spec(rows: usize, columns: usize) -> GridSpec {
        GridSpec {
            rows,
            columns,
            padding: 5.0,
            row_spacing: 5.0,
            column_spacing: 5.0,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    // ── Page dimensions ───────────────────────────────────────────────────────

    #[test]
    fn test_two_by_three_sheet_dimensions() {
        // Arrange
        let layout = GridLayout::new(spec(2, 3)).unwrap();

        // Act / Assert: 2×5 + 3×43.18 + 2×5 and 2×5 + 2×12.7 + 1×5
        assert_close(layout.width(), 149.54);
        assert_close(layout.height(), 40.4);
    }

    #[test]
    fn test_single_cell_sheet_has_no_gaps() {
        let layout = GridLayout::new(spec(1, 1)).unwrap();
        assert_close(layout.width(), 10.0 + DOMINO_WIDTH_MM);
        assert_close(layout.height(), 10.0 + DOMINO_HEIGHT_MM);
    }

    #[test]
    fn test_zero_padding_and_spacing_packs_dominoes_edge_to_edge() {
        let layout = GridLayout::new(GridSpec {
            rows: 3,
            columns: 4,
            padding: 0.0,
            row_spacing: 0.0,
            column_spacing: 0.0,
        })
        .unwrap();
        assert_close(layout.width(), 4.0 * DOMINO_WIDTH_MM);
        assert_close(layout.height(), 3.0 * DOMINO_HEIGHT_MM);
    }

    // ── Cell offsets ──────────────────────────────────────────────────────────

    #[test]
    fn test_first_cell_starts_at_padding() {
        let layout = GridLayout::new(spec(2, 3)).unwrap();
        assert_eq!(layout.cell_offset(0, 0), Some(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_cell_offset_advances_by_domino_plus_spacing() {
        let layout = GridLayout::new(spec(2, 3)).unwrap();

        let offset = layout.cell_offset(2, 1).unwrap();

        assert_close(offset.x, 5.0 + 2.0 * (DOMINO_WIDTH_MM + 5.0));
        assert_close(offset.y, 5.0 + DOMINO_HEIGHT_MM + 5.0);
    }

    #[test]
    fn test_last_cell_ends_one_padding_before_page_edge() {
        let layout = GridLayout::new(spec(4, 5)).unwrap();

        let last = layout.cell_offset(4, 3).unwrap();

        assert_close(last.x + DOMINO_WIDTH_MM + 5.0, layout.width());
        assert_close(last.y + DOMINO_HEIGHT_MM + 5.0, layout.height());
    }

    #[test]
    fn test_cell_offset_outside_grid_is_none() {
        let layout = GridLayout::new(spec(2, 3)).unwrap();
        assert_eq!(layout.cell_offset(3, 0), None);
        assert_eq!(layout.cell_offset(0, 2), None);
    }

    // ── Validation ────────────────────────────────────────────────────────────

    #[test]
    fn test_zero_rows_is_rejected() {
        assert_eq!(GridLayout::new(spec(0, 3)), Err(GeometryError::ZeroRows));
    }

    #[test]
    fn test_zero_columns_is_rejected() {
        assert_eq!(GridLayout::new(spec(2, 0)), Err(GeometryError::ZeroColumns));
    }

    #[test]
    fn test_negative_padding_is_rejected() {
        let mut s = spec(2, 2);
        s.padding = -1.0;
        assert_eq!(
            GridLayout::new(s),
            Err(GeometryError::InvalidLength { name: "padding", value: -1.0 })
        );
    }

    #[test]
    fn test_negative_row_spacing_is_rejected() {
        let mut s = spec(2, 2);
        s.row_spacing = -0.5;
        assert!(matches!(
            GridLayout::new(s),
            Err(GeometryError::InvalidLength { name: "row_spacing", .. })
        ));
    }

    #[test]
    fn test_nan_column_spacing_is_rejected() {
        let mut s = spec(2, 2);
        s.column_spacing = f64::NAN;
        assert!(matches!(
            GridLayout::new(s),
            Err(GeometryError::InvalidLength { name: "column_spacing", .. })
        ));
    }

    #[test]
    fn test_infinite_padding_is_rejected() {
        let mut s = spec(2, 2);
        s.padding = f64::INFINITY;
        assert!(GridLayout::new(s).is_err());
    }

    #[test]
    fn test_cell_count_multiplies_rows_and_columns() {
        assert_eq!(spec(3, 10).cell_count(), Some(30));
    }

    #[test]
    fn test_cell_count_overflow_is_none() {
        assert_eq!(spec(usize::MAX / 2 + 1, 2).cell_count(), None);
    }

    // ── calculate_columns ─────────────────────────────────────────────────────

    #[test]
    fn test_calculate_columns_for_half_metre_label() {
        // floor((500 - 10) / 48.18) = floor(10.17) = 10
        assert_eq!(calculate_columns(500.0, 5.0, 5.0), 10);
    }

    #[test]
    fn test_calculate_columns_exact_fit() {
        let length = 2.0 * 5.0 + 3.0 * (DOMINO_WIDTH_MM + 5.0);
        assert_eq!(calculate_columns(length + 1e-6, 5.0, 5.0), 3);
    }

    #[test]
    fn test_calculate_columns_too_short_for_one_domino() {
        assert_eq!(calculate_columns(40.0, 5.0, 5.0), 0);
    }

    #[test]
    fn test_calculate_columns_length_smaller_than_padding_saturates() {
        assert_eq!(calculate_columns(6.0, 5.0, 5.0), 0);
    }
}
