//! OCR engine boundary
//!
//! The engine consumes an image by file path and returns recognized text
//! lines with quadrilateral bounding boxes in pixel coordinates of that
//! image. Two backends are provided: a PaddleOCR server reached over HTTP
//! and the Tesseract CLI run as a subprocess.

mod engine;
mod types;

pub use engine::{OcrEngine, PaddleServerEngine, TesseractEngine};
pub use types::{OcrError, Point, Quad, RecognizedLine};
