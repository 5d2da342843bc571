//! Integration tests for the full sheet pipeline.
//!
//! These tests drive the public API end to end: catalog build, sampling,
//! column-major grid fill, layout, rendering and the print boundary.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use domino_core::{
    calculate_columns, render::recording::RecordingCanvas, render_sheet, sample, Catalog,
    DotPattern, GridLayout, GridSpec, LabelPrinter, PlacementGrid, PrintError, PrintTransport,
    RasterImage, Rasterizer, SampleError, SvgCanvas, SvgDocument,
};
use domino_core::print::{mm_to_pixels, PrinterStatus, RasterOptions, PRINTABLE_HEIGHT_PX};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn spec(rows: usize, columns: usize) -> GridSpec {
    GridSpec {
        rows,
        columns,
        padding: 5.0,
        row_spacing: 5.08,
        column_spacing: 5.08,
    }
}

/// Rasterizer stand-in that reports the pixel size a real one would produce.
struct SizeOnlyRasterizer;

impl Rasterizer for SizeOnlyRasterizer {
    fn rasterize(&self, document: &SvgDocument, options: &RasterOptions) -> Result<RasterImage, PrintError> {
        Ok(RasterImage {
            width_px: mm_to_pixels(document.width_mm(), options.dpi),
            height_px: mm_to_pixels(document.height_mm(), options.dpi),
            data: document.as_str().as_bytes().to_vec(),
        })
    }
}

/// One job seen by [`RecordingTransport`]: device, raster height, quality.
type Job = (String, u32, bool);

/// Transport that records every job it receives.
///
/// `jobs` is shared so a test can keep a handle after moving the transport
/// into a [`LabelPrinter`].
#[derive(Default)]
struct RecordingTransport {
    jobs: Arc<Mutex<Vec<Job>>>,
    status_errors: Vec<String>,
}

impl PrintTransport for RecordingTransport {
    fn send(&mut self, device: &str, image: &RasterImage, high_quality: bool) -> std::io::Result<PrinterStatus> {
        self.jobs
            .lock()
            .unwrap()
            .push((device.to_string(), image.height_px, high_quality));
        Ok(PrinterStatus {
            errors: self.status_errors.clone(),
        })
    }
}

#[test]
fn test_pipeline_draws_one_body_and_ten_dots_per_domino() {
    // Arrange
    let catalog = Catalog::build();
    let layout = GridLayout::new(spec(3, 4)).unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    // Act
    let patterns = sample(&catalog, layout.rows() * layout.columns(), &mut rng).unwrap();
    let grid = PlacementGrid::fill(layout.rows(), layout.columns(), patterns).unwrap();
    let mut canvas = RecordingCanvas::new();
    render_sheet(&layout, &grid, &mut canvas).unwrap();

    // Assert
    assert_eq!(canvas.rectangles.len(), 12);
    assert_eq!(canvas.circles.len(), 12 * 10);
}

#[test]
fn test_pipeline_grid_holds_distinct_catalog_members() {
    let catalog = Catalog::build();
    let mut rng = StdRng::seed_from_u64(99);

    let patterns = sample(&catalog, 40, &mut rng).unwrap();
    let grid = PlacementGrid::fill(5, 8, patterns).unwrap();

    let unique: HashSet<DotPattern> = grid.placements().map(|p| p.pattern).collect();
    assert_eq!(unique.len(), 40);
    assert!(unique.iter().all(|p| catalog.contains(*p)));
}

#[test]
fn test_hundred_by_hundred_sheet_is_insufficient_supply() {
    // Arrange
    let catalog = Catalog::build();
    let layout = GridLayout::new(spec(100, 100)).unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    // Act
    let result = sample(&catalog, layout.rows() * layout.columns(), &mut rng);

    // Assert: reported, never truncated
    assert_eq!(
        result,
        Err(SampleError::InsufficientSupply {
            requested: 10_000,
            available: catalog.len(),
        })
    );
}

#[test]
fn test_whole_catalog_fits_on_one_sheet() {
    let catalog = Catalog::build();
    let rows = 4;
    let columns = catalog.len() / rows;
    let mut rng = StdRng::seed_from_u64(3);

    let patterns = sample(&catalog, rows * columns, &mut rng).unwrap();

    assert!(PlacementGrid::fill(rows, columns, patterns).is_ok());
}

#[test]
fn test_svg_output_matches_layout_size() {
    let catalog = Catalog::build();
    let layout = GridLayout::new(spec(2, 3)).unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let patterns = sample(&catalog, 6, &mut rng).unwrap();
    let grid = PlacementGrid::fill(2, 3, patterns).unwrap();

    let mut canvas = SvgCanvas::new(layout.width(), layout.height());
    render_sheet(&layout, &grid, &mut canvas).unwrap();
    let doc = canvas.finish();

    assert_eq!(doc.as_str().matches("<rect ").count(), 6);
    assert_eq!(doc.as_str().matches("<circle ").count(), 60);
    assert_eq!(doc.width_mm(), layout.width());
}

#[test]
fn test_label_length_helper_feeds_layout() {
    // A 500 mm label with 5 mm padding and spacing holds 10 columns.
    let columns = calculate_columns(500.0, 5.0, 5.0);
    let layout = GridLayout::new(GridSpec {
        rows: 1,
        columns,
        padding: 5.0,
        row_spacing: 5.0,
        column_spacing: 5.0,
    })
    .unwrap();

    assert_eq!(columns, 10);
    assert!(layout.width() <= 500.0);
}

#[test]
fn test_print_boundary_accepts_sheet_sized_to_printable_height() {
    // Arrange: a document exactly as tall as the printable area
    let height_mm = f64::from(PRINTABLE_HEIGHT_PX) / 300.0 * 25.4;
    let doc = SvgCanvas::new(100.0, height_mm).finish();
    let image = SizeOnlyRasterizer
        .rasterize(&doc, &RasterOptions::default())
        .unwrap();
    let transport = RecordingTransport::default();
    let jobs = Arc::clone(&transport.jobs);
    let mut printer = LabelPrinter::new(transport, "usb://label");

    // Act
    let result = printer.print(&image, false);

    // Assert
    assert!(result.is_ok());
    assert_eq!(
        *jobs.lock().unwrap(),
        vec![("usb://label".to_string(), PRINTABLE_HEIGHT_PX, false)]
    );
}

#[test]
fn test_print_boundary_rejects_sheet_of_wrong_height() {
    let layout = GridLayout::new(spec(2, 3)).unwrap();
    let doc = SvgCanvas::new(layout.width(), layout.height()).finish();
    let image = SizeOnlyRasterizer
        .rasterize(&doc, &RasterOptions::default())
        .unwrap();
    let transport = RecordingTransport::default();
    let jobs = Arc::clone(&transport.jobs);
    let mut printer = LabelPrinter::new(transport, "usb://label");

    let result = printer.print(&image, false);

    assert!(matches!(result, Err(PrintError::HeightMismatch { expected: 696, .. })));
    assert!(jobs.lock().unwrap().is_empty(), "invalid raster must not be sent");
}

#[test]
fn test_print_boundary_reports_device_errors() {
    let image = RasterImage {
        width_px: 10,
        height_px: PRINTABLE_HEIGHT_PX,
        data: Vec::new(),
    };
    let transport = RecordingTransport {
        status_errors: vec!["Replace media".to_string()],
        ..RecordingTransport::default()
    };
    let mut printer = LabelPrinter::new(transport, "usb://label");

    let result = printer.print(&image, false);

    assert!(matches!(result, Err(PrintError::Printing { .. })));
}
