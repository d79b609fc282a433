//! Page rasterization via MuPDF
//!
//! Renders single PDF pages to high-resolution PNG bitmaps for the OCR
//! engine. The bitmap's pixel dimensions are returned alongside the encoded
//! bytes because the position mapping downstream depends on them exactly.

mod renderer;
mod types;

pub use renderer::{PdfRenderError, PdfRenderer};
pub use types::PageBitmap;
