//! Position mapping
//!
//! OCR bounding boxes arrive in pixel coordinates of the rendered bitmap; the
//! output document is a fixed A4 canvas in points. The horizontal position of
//! a line is approximated by an origin-anchored linear scale of the box's
//! top-left x coordinate. Vertical position, text rotation and the box's
//! right/bottom edges are deliberately not reconstructed.

/// A4 page width in points.
pub const A4_WIDTH_POINTS: f32 = 595.28;

/// A4 page height in points. Unused by the horizontal mapping itself; kept as
/// the record of the target canvas.
pub const A4_HEIGHT_POINTS: f32 = 842.36;

/// Pixel dimensions of the bitmap a set of OCR boxes was produced from.
///
/// Scaling must use the exact dimensions of the bitmap that was OCR'd for the
/// box in question; mismatched dimensions silently corrupt the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageGeometry {
    pub width: u32,
    pub height: u32,
}

impl PageGeometry {
    /// Map a bounding box's top-left x coordinate (bitmap pixels) to a left
    /// indent on the A4 output page (points).
    pub fn left_indent_pt(&self, x0: f32) -> f32 {
        let x_scale = A4_WIDTH_POINTS / self.width as f32;
        x0 * x_scale
    }
}
