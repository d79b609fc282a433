//! Batch driver
//!
//! Enumerates the input folder for PDF files and drives the per-page pipeline
//! strictly sequentially: rasterize, save the bitmap, OCR, map positions,
//! translate, append to the output document. One Word document is produced
//! per input PDF, one PNG per page.
//!
//! Translation failures are recovered line by line; any rasterization, OCR or
//! file-I/O error aborts the whole batch.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::config::{Config, PathsConfig};
use crate::docx::{DocxAssembler, DocxError, PositionedLine};
use crate::layout::PageGeometry;
use crate::ocr::{OcrEngine, OcrError};
use crate::pdf::{PdfRenderError, PdfRenderer};
use crate::translate::{translate_or_original, Translator};

/// Fatal batch errors. Translation failures never surface here.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Render(#[from] PdfRenderError),

    #[error(transparent)]
    Ocr(#[from] OcrError),

    #[error(transparent)]
    Docx(#[from] DocxError),
}

/// Totals reported after a completed run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchSummary {
    pub files: usize,
    pub pages: usize,
}

/// Runs the whole batch with injected OCR and translation services.
pub struct BatchRunner {
    config: Config,
    ocr: Arc<dyn OcrEngine>,
    translator: Arc<dyn Translator>,
}

impl BatchRunner {
    pub fn new(config: Config, ocr: Arc<dyn OcrEngine>, translator: Arc<dyn Translator>) -> Self {
        Self {
            config,
            ocr,
            translator,
        }
    }

    /// Process every `.pdf` in the input folder, in directory-listing order.
    pub async fn run(&self) -> Result<BatchSummary, BatchError> {
        ensure_output_dirs(&self.config.paths)?;

        let mut summary = BatchSummary::default();
        for entry in fs::read_dir(&self.config.paths.input_dir)? {
            let entry = entry?;
            let file_name = entry.file_name().to_string_lossy().into_owned();
            // Case-sensitive extension match, non-recursive.
            if !file_name.ends_with(".pdf") {
                continue;
            }

            let path = entry.path();
            tracing::info!("Processing {}", path.display());
            summary.pages += self.process_pdf(&path, &file_name).await?;
            summary.files += 1;
        }

        Ok(summary)
    }

    /// Convert one PDF into one Word document; returns the page count.
    async fn process_pdf(&self, path: &Path, file_name: &str) -> Result<usize, BatchError> {
        let renderer = PdfRenderer::open(path)?;
        let mut assembler = DocxAssembler::new(
            file_name,
            &self.config.translate.target,
            &self.config.docx,
        );

        let zoom = self.config.render.zoom;
        let dpi = self.config.render.dpi();
        let images_dir = self.config.paths.images_dir();

        for page_index in 0..renderer.page_count() {
            let bitmap = renderer.render_page(page_index, zoom)?;

            let image_path = images_dir.join(image_file_name(file_name, page_index + 1, dpi));
            fs::write(&image_path, &bitmap.png)?;

            let lines = self.ocr.recognize(&image_path).await?;
            tracing::debug!(
                "Page {}: {} line(s) recognized by {}",
                page_index + 1,
                lines.len(),
                self.ocr.name()
            );

            assembler.start_page(page_index + 1);

            // Scale with the dimensions of the exact bitmap that was OCR'd.
            let geometry = PageGeometry {
                width: bitmap.width,
                height: bitmap.height,
            };
            for line in &lines {
                let left_indent_pt = geometry.left_indent_pt(line.quad.top_left().x);
                let text = translate_or_original(self.translator.as_ref(), &line.text).await;
                assembler.add_line(&PositionedLine {
                    text,
                    left_indent_pt,
                });
            }
        }

        let document_path = self
            .config
            .paths
            .word_files_dir()
            .join(document_file_name(file_name));
        assembler.save(&document_path)?;
        tracing::info!(
            "Translated OCR results saved to {}",
            document_path.display()
        );

        Ok(renderer.page_count())
    }
}

/// Create the output root and its two subfolders before the batch loop runs.
pub fn ensure_output_dirs(paths: &PathsConfig) -> std::io::Result<()> {
    fs::create_dir_all(&paths.output_dir)?;
    fs::create_dir_all(paths.images_dir())?;
    fs::create_dir_all(paths.word_files_dir())?;
    Ok(())
}

/// Filename of the saved page bitmap (`n` is 1-based).
pub fn image_file_name(pdf_file_name: &str, page_number: usize, dpi: u32) -> String {
    format!("{}_page_{}_{}dpi.png", pdf_file_name, page_number, dpi)
}

/// Filename of the output Word document.
pub fn document_file_name(pdf_file_name: &str) -> String {
    format!("{}_ocr_results_translated.docx", pdf_file_name)
}
