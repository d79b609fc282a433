//! Rasterizer data types

/// One PDF page rendered to a bitmap.
///
/// Created per page, written to disk as PNG, then discarded; the pipeline
/// never holds more than one page bitmap at a time.
#[derive(Debug, Clone)]
pub struct PageBitmap {
    /// PNG-encoded pixel data.
    pub png: Vec<u8>,
    /// Bitmap width in pixels.
    pub width: u32,
    /// Bitmap height in pixels.
    pub height: u32,
}
