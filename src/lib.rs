//! PDF Babel
//!
//! Batch-converts PDF files into translated Word documents. Each page is
//! rendered to a high-resolution bitmap, OCR'd into text lines with pixel
//! bounding boxes, translated, and written to a `.docx` whose paragraphs carry
//! a left indent approximating the line's horizontal position on the original
//! page.
//!
//! # Modules
//!
//! - `pdf`: page rasterization via MuPDF
//! - `ocr`: OCR engine boundary (Tesseract subprocess or PaddleOCR server)
//! - `layout`: pixel-space to point-space position mapping
//! - `translate`: translation boundary with original-text fallback
//! - `docx`: Word document assembly
//! - `batch`: the sequential batch driver

pub mod batch;
pub mod config;
pub mod docx;
pub mod layout;
pub mod ocr;
pub mod pdf;
pub mod translate;
