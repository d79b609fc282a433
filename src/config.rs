//! Run configuration
//!
//! Every parameter of a batch run lives here as plain structs whose defaults
//! are the fixed constants of the pipeline. Nothing is read from the command
//! line, the environment, or a config file; `Config::default()` is the whole
//! configuration story.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Full configuration for one batch run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub paths: PathsConfig,
    pub render: RenderConfig,
    pub ocr: OcrConfig,
    pub translate: TranslateConfig,
    pub docx: DocxConfig,
}

/// Input and output folder layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Folder scanned (non-recursively) for `.pdf` files.
    pub input_dir: PathBuf,
    /// Output root; created before processing if absent.
    pub output_dir: PathBuf,
}

impl PathsConfig {
    /// Folder receiving one PNG per rendered page.
    pub fn images_dir(&self) -> PathBuf {
        self.output_dir.join("images")
    }

    /// Folder receiving one Word document per input PDF.
    pub fn word_files_dir(&self) -> PathBuf {
        self.output_dir.join("word_files")
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
        }
    }
}

/// Page rasterization parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Scale factor applied to the PDF's 72-dpi coordinate space
    /// (1.0 = 72 DPI, the default yields 600 DPI).
    pub zoom: f32,
}

impl RenderConfig {
    /// Effective resolution, used in the image filename label.
    pub fn dpi(&self) -> u32 {
        (self.zoom * 72.0).round() as u32
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { zoom: 600.0 / 72.0 }
    }
}

/// OCR engine selection and per-engine settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OcrConfig {
    pub engine: OcrEngineKind,
    pub paddle: PaddleOcrConfig,
    pub tesseract: TesseractOcrConfig,
}

/// Which OCR backend the batch uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OcrEngineKind {
    /// PaddleOCR reached over HTTP.
    #[default]
    Paddle,
    /// Tesseract CLI subprocess.
    Tesseract,
}

/// Settings for a PaddleOCR serving endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaddleOcrConfig {
    /// Base URL of the PaddleOCR server.
    pub base_url: String,
    /// Recognition language code (PaddleOCR vocabulary, e.g. "ch").
    pub language: String,
    /// Whether the server should run its text-angle classifier.
    pub use_angle_cls: bool,
}

impl Default for PaddleOcrConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8866".to_string(),
            language: "ch".to_string(),
            use_angle_cls: true,
        }
    }
}

/// Settings for the Tesseract CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TesseractOcrConfig {
    /// Language pack (Tesseract vocabulary, e.g. "chi_sim").
    pub language: String,
    /// Page segmentation mode (0-13).
    pub psm: u8,
}

impl Default for TesseractOcrConfig {
    fn default() -> Self {
        Self {
            language: "chi_sim".to_string(),
            psm: 3,
        }
    }
}

/// Translation source and target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Source language code (e.g. "zh-CN").
    pub source: String,
    /// Target language code (e.g. "vi").
    pub target: String,
    /// Translation endpoint URL.
    pub endpoint: String,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            source: "zh-CN".to_string(),
            target: "vi".to_string(),
            endpoint: "https://translate.googleapis.com/translate_a/single".to_string(),
        }
    }
}

/// Fixed styling for output paragraphs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocxConfig {
    /// Typeface applied to ascii, hi-ansi and east-asian runs, so CJK
    /// characters fall back to the same font.
    pub font: String,
    /// Paragraph font size in points.
    pub font_size_pt: usize,
}

impl Default for DocxConfig {
    fn default() -> Self {
        Self {
            font: "Arial".to_string(),
            font_size_pt: 10,
        }
    }
}
