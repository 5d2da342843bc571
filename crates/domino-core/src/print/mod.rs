//! Boundary to the rasterizer and the label printer.
//!
//! Neither the rasterizer nor the printer driver lives in this crate.  This
//! module defines the traits they are reached through and the checks that
//! run before a payload is handed over:
//!
//! - [`Rasterizer`] turns an [`SvgDocument`] into a [`RasterImage`].
//! - [`PrintTransport`] ships a raster to a device and reports its status.
//! - [`LabelPrinter`] validates the raster height and maps device status
//!   errors to [`PrintError::Printing`].
//!
//! There are no retries here: a failed print surfaces to the caller as-is.

use thiserror::Error;
use tracing::{debug, warn};

use crate::render::svg::SvgDocument;

/// Printable height in pixels of 62 mm endless tape at 300 DPI.
pub const PRINTABLE_HEIGHT_PX: u32 = 696;

/// Resolution the sheets are rasterized at.
pub const DEFAULT_DPI: u32 = 300;

/// Background colour used when rasterizing.
pub const DEFAULT_BACKGROUND: &str = "white";

const MM_PER_INCH: f64 = 25.4;

/// Errors raised at the print boundary.
#[derive(Debug, Error)]
pub enum PrintError {
    /// The raster does not match the printer's printable height.
    #[error("image is {actual} px high, printer expects {expected} px")]
    HeightMismatch { expected: u32, actual: u32 },

    /// The device reported error conditions in its status response.
    #[error("printer {device} reported errors: {}", .errors.join(", "))]
    Printing { device: String, errors: Vec<String> },

    /// The rasterizer failed to produce an image.
    #[error("rasterization failed: {0}")]
    Rasterize(String),

    /// The transport to the device failed.
    #[error("printer transport error: {0}")]
    Transport(#[from] std::io::Error),
}

/// Options passed to a [`Rasterizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterOptions {
    pub dpi: u32,
    /// CSS colour name painted behind the document.
    pub background: String,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            background: DEFAULT_BACKGROUND.to_string(),
        }
    }
}

/// A rasterized sheet ready for printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub width_px: u32,
    pub height_px: u32,
    /// Encoded image bytes; the format is agreed between rasterizer and
    /// transport.
    pub data: Vec<u8>,
}

/// Converts a vector document into a raster image.
pub trait Rasterizer {
    /// Rasterizes `document` with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`PrintError::Rasterize`] if the document cannot be rendered.
    fn rasterize(&self, document: &SvgDocument, options: &RasterOptions) -> Result<RasterImage, PrintError>;
}

/// Status returned by a printer after a job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrinterStatus {
    /// Error conditions reported by the device; empty on success.
    pub errors: Vec<String>,
}

/// Sends a raster payload to a physical printer.
#[cfg_attr(test, mockall::automock)]
pub trait PrintTransport {
    /// Transmits `image` to the device identified by `device`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the device cannot be reached.
    fn send(&mut self, device: &str, image: &RasterImage, high_quality: bool) -> std::io::Result<PrinterStatus>;
}

/// Expected raster height for a print job.
///
/// High-quality mode prints at double vertical resolution.
pub fn expected_height_px(high_quality: bool) -> u32 {
    if high_quality {
        PRINTABLE_HEIGHT_PX * 2
    } else {
        PRINTABLE_HEIGHT_PX
    }
}

/// Checks a raster against the printer's printable height.
///
/// # Errors
///
/// Returns [`PrintError::HeightMismatch`] if the heights differ.
pub fn validate_raster(image: &RasterImage, high_quality: bool) -> Result<(), PrintError> {
    let expected = expected_height_px(high_quality);
    if image.height_px != expected {
        return Err(PrintError::HeightMismatch {
            expected,
            actual: image.height_px,
        });
    }
    Ok(())
}

/// Converts a physical length to a pixel count at `dpi`, rounded to the
/// nearest pixel.
pub fn mm_to_pixels(mm: f64, dpi: u32) -> u32 {
    (mm / MM_PER_INCH * f64::from(dpi)).round().max(0.0) as u32
}

/// A printer bound to one device identifier.
pub struct LabelPrinter<T: PrintTransport> {
    transport: T,
    device: String,
}

impl<T: PrintTransport> LabelPrinter<T> {
    pub fn new(transport: T, device: impl Into<String>) -> Self {
        Self {
            transport,
            device: device.into(),
        }
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    /// Validates `image` and sends it to the device.
    ///
    /// # Errors
    ///
    /// - [`PrintError::HeightMismatch`] before anything is sent.
    /// - [`PrintError::Transport`] if the device cannot be reached.
    /// - [`PrintError::Printing`] if the device reports error conditions.
    pub fn print(&mut self, image: &RasterImage, high_quality: bool) -> Result<(), PrintError> {
        validate_raster(image, high_quality)?;

        debug!(
            device = %self.device,
            width = image.width_px,
            height = image.height_px,
            high_quality,
            "sending raster to printer"
        );
        let status = self.transport.send(&self.device, image, high_quality)?;

        if !status.errors.is_empty() {
            warn!(device = %self.device, errors = ?status.errors, "printer reported errors");
            return Err(PrintError::Printing {
                device: self.device.clone(),
                errors: status.errors,
            });
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
