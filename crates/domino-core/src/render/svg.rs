//! SVG output for domino sheets.
//!
//! The document uses the SVG 1.1 Tiny profile.  Its `width` and `height`
//! carry `mm` units and the `viewBox` maps one user unit to one millimetre,
//! so primitive coordinates are written unchanged.
//!
//! No background is drawn; the rasterizer supplies one (white for labels).

use std::fmt::Write as _;
use std::path::Path;

use super::{Canvas, Circle, Fill, Rectangle};

/// An SVG canvas sized to a sheet.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    width_mm: f64,
    height_mm: f64,
    body: String,
}

impl SvgCanvas {
    /// Creates an empty canvas of the given physical size.
    pub fn new(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_mm,
            height_mm,
            body: String::new(),
        }
    }

    /// Closes the canvas and returns the finished document.
    pub fn finish(self) -> SvgDocument {
        let mut markup = String::with_capacity(self.body.len() + 256);
        let w = format_mm(self.width_mm);
        let h = format_mm(self.height_mm);
        // Writing to a `String` cannot fail.
        let _ = writeln!(markup, r#"<?xml version="1.0" encoding="utf-8" ?>"#);
        let _ = writeln!(
            markup,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" baseProfile="tiny" width="{w}mm" height="{h}mm" viewBox="0 0 {w} {h}">"#
        );
        markup.push_str(&self.body);
        markup.push_str("</svg>\n");

        SvgDocument {
            width_mm: self.width_mm,
            height_mm: self.height_mm,
            markup,
        }
    }
}

impl Canvas for SvgCanvas {
    fn add_rectangle(&mut self, r: Rectangle) {
        let radius = format_mm(r.corner_radius);
        let _ = writeln!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{radius}" ry="{radius}" fill="{}" />"#,
            format_mm(r.origin.x),
            format_mm(r.origin.y),
            format_mm(r.width),
            format_mm(r.height),
            colour(r.fill),
        );
    }

    fn add_circle(&mut self, c: Circle) {
        let _ = writeln!(
            self.body,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" />"#,
            format_mm(c.center.x),
            format_mm(c.center.y),
            format_mm(c.radius),
            colour(c.fill),
        );
    }
}

/// A finished SVG document.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    width_mm: f64,
    height_mm: f64,
    markup: String,
}

impl SvgDocument {
    pub fn width_mm(&self) -> f64 {
        self.width_mm
    }

    pub fn height_mm(&self) -> f64 {
        self.height_mm
    }

    /// The document as SVG markup.
    pub fn as_str(&self) -> &str {
        &self.markup
    }

    /// Writes the markup to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be written.
    pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, &self.markup)
    }
}

fn colour(fill: Fill) -> &'static str {
    match fill {
        Fill::Dark => "black",
        Fill::Light => "white",
    }
}

/// Formats a millimetre value with at most four decimals and no trailing
/// zeros, hiding float noise such as `96.36000000000001`.
fn format_mm(value: f64) -> String {
    let fixed = format!("{value:.4}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
