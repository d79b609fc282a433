//! End-to-end batch pipeline tests
//!
//! Drives the full driver over a generated PDF with an in-process OCR double
//! and an always-failing translator, checking the output folder layout and
//! the deterministic file naming.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use pdf_babel::batch::{BatchRunner, BatchSummary};
use pdf_babel::config::Config;
use pdf_babel::ocr::{OcrEngine, OcrError, Quad, RecognizedLine};
use pdf_babel::translate::{TranslationError, Translator};

/// Build a valid one-page A4 PDF with a correct xref table.
fn one_page_pdf() -> Vec<u8> {
    let objects = [
        "1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n",
        "2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n",
        "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 595 842] >>\nendobj\n",
    ];

    let mut buf: Vec<u8> = Vec::new();
    buf.extend_from_slice(b"%PDF-1.4\n");

    let mut offsets = Vec::new();
    for object in objects {
        offsets.push(buf.len());
        buf.extend_from_slice(object.as_bytes());
    }

    let xref_pos = buf.len();
    buf.extend_from_slice(b"xref\n0 4\n0000000000 65535 f \n");
    for offset in offsets {
        buf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    buf.extend_from_slice(b"trailer\n<< /Size 4 /Root 1 0 R >>\nstartxref\n");
    buf.extend_from_slice(format!("{}\n", xref_pos).as_bytes());
    buf.extend_from_slice(b"%%EOF\n");
    buf
}

struct ScriptedOcr {
    lines: Vec<RecognizedLine>,
}

#[async_trait]
impl OcrEngine for ScriptedOcr {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn recognize(&self, image_path: &Path) -> Result<Vec<RecognizedLine>, OcrError> {
        // The driver must have written the bitmap before asking for OCR.
        assert!(image_path.is_file(), "bitmap missing at OCR time");
        Ok(self.lines.clone())
    }
}

struct FailingTranslator;

#[async_trait]
impl Translator for FailingTranslator {
    async fn translate(&self, _text: &str) -> Result<String, TranslationError> {
        Err(TranslationError::Api("no network in tests".to_string()))
    }
}

fn test_config(root: &Path) -> Config {
    let mut config = Config::default();
    config.paths.input_dir = root.join("input");
    config.paths.output_dir = root.join("output");
    // Render small pages quickly; 1.0 zoom labels files as 72dpi.
    config.render.zoom = 1.0;
    config
}

fn scripted_lines() -> Vec<RecognizedLine> {
    vec![
        RecognizedLine {
            text: "第一行".to_string(),
            confidence: 0.98,
            quad: Quad::from_rect(0.0, 10.0, 200.0, 24.0),
        },
        RecognizedLine {
            text: "第二行".to_string(),
            confidence: 0.91,
            quad: Quad::from_rect(300.0, 60.0, 150.0, 24.0),
        },
    ]
}

async fn run_batch(config: Config) -> BatchSummary {
    let runner = BatchRunner::new(
        config,
        Arc::new(ScriptedOcr {
            lines: scripted_lines(),
        }),
        Arc::new(FailingTranslator),
    );
    runner.run().await.expect("batch run failed")
}

#[tokio::test]
async fn single_pdf_produces_png_and_docx_at_template_paths() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    std::fs::create_dir_all(&config.paths.input_dir).unwrap();
    std::fs::write(config.paths.input_dir.join("scan.pdf"), one_page_pdf()).unwrap();

    let summary = run_batch(config.clone()).await;
    assert_eq!(summary.files, 1);
    assert_eq!(summary.pages, 1);

    let image = config
        .paths
        .images_dir()
        .join("scan.pdf_page_1_72dpi.png");
    assert!(image.is_file(), "missing {}", image.display());

    let doc = config
        .paths
        .word_files_dir()
        .join("scan.pdf_ocr_results_translated.docx");
    assert!(doc.is_file(), "missing {}", doc.display());

    let bytes = std::fs::read(&doc).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[tokio::test]
async fn two_pdfs_produce_two_documents() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    std::fs::create_dir_all(&config.paths.input_dir).unwrap();
    std::fs::write(config.paths.input_dir.join("a.pdf"), one_page_pdf()).unwrap();
    std::fs::write(config.paths.input_dir.join("b.pdf"), one_page_pdf()).unwrap();
    // Non-PDF files are skipped, extension match is case-sensitive.
    std::fs::write(config.paths.input_dir.join("notes.txt"), b"ignore").unwrap();
    std::fs::write(config.paths.input_dir.join("UPPER.PDF"), one_page_pdf()).unwrap();

    let summary = run_batch(config.clone()).await;
    assert_eq!(summary.files, 2);
    assert_eq!(summary.pages, 2);

    let word_files = config.paths.word_files_dir();
    assert!(word_files.join("a.pdf_ocr_results_translated.docx").is_file());
    assert!(word_files.join("b.pdf_ocr_results_translated.docx").is_file());
}

#[tokio::test]
async fn rerun_over_unchanged_inputs_regenerates_the_same_paths() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    std::fs::create_dir_all(&config.paths.input_dir).unwrap();
    std::fs::write(config.paths.input_dir.join("scan.pdf"), one_page_pdf()).unwrap();

    run_batch(config.clone()).await;
    let summary = run_batch(config.clone()).await;
    assert_eq!(summary.files, 1);

    let image = config
        .paths
        .images_dir()
        .join("scan.pdf_page_1_72dpi.png");
    assert!(image.is_file());
}
