//! Mapping from placed patterns to drawing primitives.
//!
//! The renderer knows nothing about file formats.  It emits rounded
//! rectangles and circles through the [`Canvas`] trait; [`svg::SvgCanvas`]
//! turns them into an SVG document and [`recording::RecordingCanvas`] keeps
//! them in memory for tests.
//!
//! # Dot placement
//!
//! Within a cell whose top-left corner is `(x, y)`, the dot for slot `i` is
//! centred at
//!
//! ```text
//! cx = x + 1.5 * DOT_DIAMETER + DOT_SPACING * (i % 8)
//! cy = y + 1.5 * DOT_DIAMETER + (DOT_SPACING if i >= 8)
//! ```
//!
//! which leaves a margin of exactly one dot diameter between the outermost
//! dots and the edge of the domino on all four sides.

use thiserror::Error;

use crate::domain::grid::PlacementGrid;
use crate::domain::layout::{
    GridLayout, Point, DOMINO_CORNER_RADIUS_MM, DOMINO_HEIGHT_MM, DOMINO_WIDTH_MM,
    DOT_DIAMETER_MM, DOT_SPACING_MM,
};
use crate::domain::pattern::{DotPattern, SLOTS_PER_ROW};

pub mod recording;
pub mod svg;

/// Fill colour role of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fill {
    /// The domino body.
    Dark,
    /// The dots, contrasting with the body.
    Light,
}

/// An axis-aligned rectangle with rounded corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    /// Top-left corner.
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub fill: Fill,
}

/// A filled circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub fill: Fill,
}

/// A single drawing instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Rectangle(Rectangle),
    Circle(Circle),
}

/// A drawing surface measured in millimetres.
pub trait Canvas {
    /// Adds a rounded rectangle.
    fn add_rectangle(&mut self, rectangle: Rectangle);

    /// Adds a circle.
    fn add_circle(&mut self, circle: Circle);

    /// Dispatches a primitive to the matching method.
    fn add(&mut self, primitive: Primitive) {
        match primitive {
            Primitive::Rectangle(r) => self.add_rectangle(r),
            Primitive::Circle(c) => self.add_circle(c),
        }
    }
}

/// Errors raised when a grid cannot be drawn on a layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The grid and the layout disagree on the number of rows or columns.
    #[error(
        "grid is {grid_rows}x{grid_columns} but layout is {layout_rows}x{layout_columns}"
    )]
    DimensionMismatch {
        grid_rows: usize,
        grid_columns: usize,
        layout_rows: usize,
        layout_columns: usize,
    },
}

/// Centre of the dot for `slot` in a cell whose top-left corner is `origin`.
pub fn dot_center(origin: Point, slot: usize) -> Point {
    let inset = 1.5 * DOT_DIAMETER_MM;
    let row_offset = if slot >= SLOTS_PER_ROW { DOT_SPACING_MM } else { 0.0 };
    Point {
        x: origin.x + inset + DOT_SPACING_MM * (slot % SLOTS_PER_ROW) as f64,
        y: origin.y + inset + row_offset,
    }
}

/// The primitives for one domino: its body followed by one circle per dot.
pub fn render_domino(pattern: DotPattern, origin: Point) -> Vec<Primitive> {
    let body = Primitive::Rectangle(Rectangle {
        origin,
        width: DOMINO_WIDTH_MM,
        height: DOMINO_HEIGHT_MM,
        corner_radius: DOMINO_CORNER_RADIUS_MM,
        fill: Fill::Dark,
    });

    std::iter::once(body)
        .chain(pattern.dots().map(|slot| {
            Primitive::Circle(Circle {
                center: dot_center(origin, slot),
                radius: DOT_DIAMETER_MM / 2.0,
                fill: Fill::Light,
            })
        }))
        .collect()
}

/// Draws every placement of `grid` onto `canvas` at the cell positions of
/// `layout`.
///
/// # Errors
///
/// Returns [`RenderError::DimensionMismatch`] if the grid and layout have
/// different shapes.  Nothing is drawn in that case.
pub fn render_sheet<C>(layout: &GridLayout, grid: &PlacementGrid, canvas: &mut C) -> Result<(), RenderError>
where
    C: Canvas + ?Sized,
{
    let mismatch = || RenderError::DimensionMismatch {
        grid_rows: grid.rows(),
        grid_columns: grid.column_count(),
        layout_rows: layout.rows(),
        layout_columns: layout.columns(),
    };

    if grid.rows() != layout.rows() || grid.column_count() != layout.columns() {
        return Err(mismatch());
    }

    for placement in grid.placements() {
        let origin = layout
            .cell_offset(placement.column, placement.row)
            .ok_or_else(mismatch)?;
        for primitive in render_domino(placement.pattern, origin) {
            canvas.add(primitive);
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
