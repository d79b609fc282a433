//! OCR data types

use serde::{Deserialize, Serialize};

/// A point in bitmap pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Quadrilateral bounding box of a detected text line: four corners in
/// detection order, starting at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad(pub [Point; 4]);

impl Quad {
    /// Build an axis-aligned quad from a left/top/width/height rectangle.
    pub fn from_rect(left: f32, top: f32, width: f32, height: f32) -> Self {
        Quad([
            Point { x: left, y: top },
            Point { x: left + width, y: top },
            Point { x: left + width, y: top + height },
            Point { x: left, y: top + height },
        ])
    }

    /// Top-left corner, the only point the position mapping consumes.
    pub fn top_left(&self) -> Point {
        self.0[0]
    }
}

/// One recognized line of text with its detection region.
///
/// Confidence is carried through from the engine but unused downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizedLine {
    pub text: String,
    pub confidence: f32,
    pub quad: Quad,
}

/// OCR error types. All of these are fatal for the batch run.
#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("Failed to read image: {0}")]
    ImageRead(String),

    #[error("OCR processing failed: {0}")]
    Processing(String),

    #[error("API error: {0}")]
    Api(String),
}
