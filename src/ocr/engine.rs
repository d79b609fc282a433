//! OCR engines

use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::{PaddleOcrConfig, TesseractOcrConfig};

use super::types::{OcrError, Point, Quad, RecognizedLine};

/// OCR engine trait
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Engine name for logging.
    fn name(&self) -> &'static str;

    /// Detect and recognize text lines in the image at `image_path`.
    ///
    /// Lines are returned in the engine's reading order (top-to-bottom,
    /// left-to-right); no additional sort is imposed.
    async fn recognize(&self, image_path: &Path) -> Result<Vec<RecognizedLine>, OcrError>;
}

/// PaddleOCR reached over HTTP.
///
/// Speaks the serving contract of a PaddleOCR web service: the request posts
/// the base64-encoded image together with the recognition language and the
/// angle-classifier switch, and the response carries one result list per
/// image, each entry a recognized line with its `text_region` quadrilateral.
pub struct PaddleServerEngine {
    base_url: String,
    language: String,
    use_angle_cls: bool,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct PaddleResponse {
    results: Vec<Vec<PaddleLine>>,
}

#[derive(Debug, Deserialize)]
struct PaddleLine {
    text: String,
    confidence: f32,
    text_region: Vec<[f32; 2]>,
}

impl PaddleServerEngine {
    pub fn new(config: &PaddleOcrConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            language: config.language.clone(),
            use_angle_cls: config.use_angle_cls,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl OcrEngine for PaddleServerEngine {
    fn name(&self) -> &'static str {
        "paddle"
    }

    async fn recognize(&self, image_path: &Path) -> Result<Vec<RecognizedLine>, OcrError> {
        use base64::Engine;

        let image_data = std::fs::read(image_path)
            .map_err(|e| OcrError::ImageRead(format!("{}: {}", image_path.display(), e)))?;
        let image_base64 = base64::engine::general_purpose::STANDARD.encode(&image_data);

        let url = format!("{}/predict/ocr_system", self.base_url);
        let request = serde_json::json!({
            "images": [image_base64],
            "lang": self.language,
            "use_angle_cls": self.use_angle_cls,
        });

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| OcrError::Api(format!("Failed to call PaddleOCR server: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(OcrError::Api(format!(
                "PaddleOCR server returned {}: {}",
                status, body
            )));
        }

        let parsed: PaddleResponse = response
            .json()
            .await
            .map_err(|e| OcrError::Api(format!("Failed to parse response: {}", e)))?;

        let page = parsed.results.into_iter().next().unwrap_or_default();
        page.into_iter().map(convert_paddle_line).collect()
    }
}

fn convert_paddle_line(line: PaddleLine) -> Result<RecognizedLine, OcrError> {
    if line.text_region.len() != 4 {
        return Err(OcrError::Api(format!(
            "expected 4-point text_region, got {} points",
            line.text_region.len()
        )));
    }
    let points = [
        Point { x: line.text_region[0][0], y: line.text_region[0][1] },
        Point { x: line.text_region[1][0], y: line.text_region[1][1] },
        Point { x: line.text_region[2][0], y: line.text_region[2][1] },
        Point { x: line.text_region[3][0], y: line.text_region[3][1] },
    ];
    Ok(RecognizedLine {
        text: line.text,
        confidence: line.confidence,
        quad: Quad(points),
    })
}

/// Tesseract CLI run as a subprocess.
///
/// Recognition goes through `tesseract <image> stdout ... tsv`; word rows of
/// the TSV output are regrouped into lines with a box that is the union of
/// the member word boxes.
pub struct TesseractEngine {
    language: String,
    psm: u8,
}

impl TesseractEngine {
    pub fn new(config: &TesseractOcrConfig) -> Self {
        Self {
            language: config.language.clone(),
            psm: config.psm,
        }
    }
}

#[async_trait]
impl OcrEngine for TesseractEngine {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    async fn recognize(&self, image_path: &Path) -> Result<Vec<RecognizedLine>, OcrError> {
        use std::process::Command;

        let output = Command::new("tesseract")
            .arg(image_path)
            .arg("stdout")
            .args(["-l", &self.language])
            .args(["--psm", &self.psm.to_string()])
            .arg("tsv")
            .output()
            .map_err(|e| OcrError::Processing(format!("Failed to run tesseract: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::Processing(format!(
                "Tesseract failed: {}",
                stderr
            )));
        }

        Ok(parse_tsv(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Regroup Tesseract TSV word rows (level 5) into recognized lines.
///
/// TSV columns: level, page_num, block_num, par_num, line_num, word_num,
/// left, top, width, height, conf, text.
fn parse_tsv(tsv: &str) -> Vec<RecognizedLine> {
    struct LineAccumulator {
        key: (u32, u32, u32),
        words: Vec<String>,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        conf_sum: f32,
    }

    impl LineAccumulator {
        fn finish(self) -> RecognizedLine {
            let count = self.words.len() as f32;
            RecognizedLine {
                text: self.words.join(" "),
                confidence: self.conf_sum / count,
                quad: Quad::from_rect(
                    self.left,
                    self.top,
                    self.right - self.left,
                    self.bottom - self.top,
                ),
            }
        }
    }

    let mut lines = Vec::new();
    let mut current: Option<LineAccumulator> = None;

    for row in tsv.lines().skip(1) {
        let cols: Vec<&str> = row.split('\t').collect();
        if cols.len() < 12 || cols[0] != "5" {
            continue;
        }

        let parse_u32 = |s: &str| s.parse::<u32>().unwrap_or(0);
        let parse_f32 = |s: &str| s.parse::<f32>().unwrap_or(0.0);

        let conf = parse_f32(cols[10]);
        let text = cols[11].trim();
        // Tesseract emits conf -1 for structural rows; skip those and blanks.
        if conf < 0.0 || text.is_empty() {
            continue;
        }

        let key = (parse_u32(cols[2]), parse_u32(cols[3]), parse_u32(cols[4]));
        let left = parse_f32(cols[6]);
        let top = parse_f32(cols[7]);
        let right = left + parse_f32(cols[8]);
        let bottom = top + parse_f32(cols[9]);

        match current.as_mut() {
            Some(acc) if acc.key == key => {
                acc.words.push(text.to_string());
                acc.left = acc.left.min(left);
                acc.top = acc.top.min(top);
                acc.right = acc.right.max(right);
                acc.bottom = acc.bottom.max(bottom);
                acc.conf_sum += conf;
            }
            _ => {
                if let Some(done) = current.take() {
                    lines.push(done.finish());
                }
                current = Some(LineAccumulator {
                    key,
                    words: vec![text.to_string()],
                    left,
                    top,
                    right,
                    bottom,
                    conf_sum: conf,
                });
            }
        }
    }

    if let Some(done) = current.take() {
        lines.push(done.finish());
    }

    lines
}
