//! In-memory canvas for tests.
//!
//! `RecordingCanvas` performs no drawing.  Every rectangle and circle is
//! pushed into a `Vec` so assertions can inspect exactly what was emitted and
//! in what order.
//!
//! ```ignore
//! let mut canvas = RecordingCanvas::new();
//! render_sheet(&layout, &grid, &mut canvas)?;
//! assert_eq!(canvas.rectangles.len(), layout.rows() * layout.columns());
//! ```

use super::{Canvas, Circle, Primitive, Rectangle};

/// A canvas that records every call.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingCanvas {
    /// Every rectangle passed to `add_rectangle`, in call order.
    pub rectangles: Vec<Rectangle>,
    /// Every circle passed to `add_circle`, in call order.
    pub circles: Vec<Circle>,
    /// Rectangles and circles interleaved in call order.
    pub primitives: Vec<Primitive>,
}

impl RecordingCanvas {
    /// Creates an empty recording canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl Canvas for RecordingCanvas {
    fn add_rectangle(&mut self, rectangle: Rectangle) {
        self.rectangles.push(rectangle);
        self.primitives.push(Primitive::Rectangle(rectangle));
    }

    fn add_circle(&mut self, circle: Circle) {
        self.circles.push(circle);
        self.primitives.push(Primitive::Circle(circle));
    }
}
