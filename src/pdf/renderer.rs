//! PDF page rendering using MuPDF

use std::path::{Path, PathBuf};

use mupdf::{Colorspace, Document, Matrix};
use thiserror::Error;

use super::types::PageBitmap;

/// Rasterization errors. All of these are fatal for the batch run.
#[derive(Debug, Error)]
pub enum PdfRenderError {
    #[error("Failed to load PDF: {0}")]
    Load(String),
    #[error("Page {0} out of range (document has {1} pages)")]
    PageOutOfRange(usize, usize),
    #[error("Image encoding error: {0}")]
    ImageEncoding(String),
    #[error("MuPDF error: {0}")]
    MuPdf(String),
}

impl From<mupdf::Error> for PdfRenderError {
    fn from(e: mupdf::Error) -> Self {
        PdfRenderError::MuPdf(e.to_string())
    }
}

/// Renders pages of one PDF file.
///
/// MuPDF's `fz_context` is not thread-safe, so a fresh document is opened per
/// operation; the pipeline is strictly sequential and only ever renders one
/// page at a time.
pub struct PdfRenderer {
    path: PathBuf,
    page_count: usize,
}

impl PdfRenderer {
    /// Open a PDF file, validating that MuPDF can parse it.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PdfRenderError> {
        let path_buf = path.as_ref().to_path_buf();
        let path_str = path_buf.to_string_lossy();

        let doc = Document::open(path_str.as_ref())
            .map_err(|e| PdfRenderError::Load(format!("{}: {}", path_buf.display(), e)))?;
        let page_count = doc.page_count()? as usize;

        Ok(Self {
            path: path_buf,
            page_count,
        })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Get a fresh document instance for the current operation.
    fn open_document(&self) -> Result<Document, PdfRenderError> {
        let path_str = self.path.to_string_lossy();
        Document::open(path_str.as_ref()).map_err(Into::into)
    }

    /// Render a page (0-based index) to a PNG bitmap at the given zoom
    /// factor (1.0 = 72 DPI).
    pub fn render_page(&self, page_index: usize, zoom: f32) -> Result<PageBitmap, PdfRenderError> {
        if page_index >= self.page_count {
            return Err(PdfRenderError::PageOutOfRange(page_index, self.page_count));
        }

        let doc = self.open_document()?;
        let page = doc.load_page(page_index as i32)?;

        let matrix = Matrix::new_scale(zoom, zoom);
        let colorspace = Colorspace::device_rgb();
        let pixmap = page.to_pixmap(&matrix, &colorspace, true, false)?;

        let width = pixmap.width() as u32;
        let height = pixmap.height() as u32;
        let png = encode_png(&pixmap, width, height)?;

        Ok(PageBitmap { png, width, height })
    }
}

/// Encode a pixmap's samples as PNG bytes.
fn encode_png(
    pixmap: &mupdf::Pixmap,
    width: u32,
    height: u32,
) -> Result<Vec<u8>, PdfRenderError> {
    let samples = pixmap.samples();
    let n = pixmap.n() as usize; // components per pixel

    let mut rgba_buffer = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height as usize {
        for x in 0..width as usize {
            let offset = (y * width as usize + x) * n;
            let r = samples.get(offset).copied().unwrap_or(0);
            let g = samples.get(offset + 1).copied().unwrap_or(0);
            let b = samples.get(offset + 2).copied().unwrap_or(0);
            let a = if n >= 4 {
                samples.get(offset + 3).copied().unwrap_or(255)
            } else {
                255
            };
            rgba_buffer.extend_from_slice(&[r, g, b, a]);
        }
    }

    let img = image::RgbaImage::from_raw(width, height, rgba_buffer)
        .ok_or_else(|| PdfRenderError::ImageEncoding("pixel buffer size mismatch".to_string()))?;

    let mut output = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(
            &mut std::io::Cursor::new(&mut output),
            image::ImageFormat::Png,
        )
        .map_err(|e| PdfRenderError::ImageEncoding(e.to_string()))?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_missing_file_fails() {
        let result = PdfRenderer::open("does-not-exist.pdf");
        assert!(matches!(result, Err(PdfRenderError::Load(_))));
    }
}
