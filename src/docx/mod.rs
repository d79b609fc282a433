//! Word document assembly
//!
//! Builds one `.docx` per input PDF: a title heading naming the source file,
//! a level-1 heading per page, and one paragraph per recognized line with the
//! mapped left indent and fixed run styling. The document is packed to disk
//! once at the end; if packing fails partway, the partial file is left in
//! place, not cleaned up.

use std::path::Path;

use docx_rs::{Docx, Paragraph, Run, RunFonts, Style, StyleType};
use thiserror::Error;

use crate::config::DocxConfig;

/// Twentieths of a point, the unit `w:ind` uses.
const TWIPS_PER_POINT: f32 = 20.0;

/// Document assembly errors.
#[derive(Debug, Error)]
pub enum DocxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to pack document: {0}")]
    Pack(String),
}

/// A translated line together with its mapped page position.
#[derive(Debug, Clone)]
pub struct PositionedLine {
    pub text: String,
    pub left_indent_pt: f32,
}

/// Incrementally assembles the output document for one input PDF.
pub struct DocxAssembler {
    docx: Docx,
    font: String,
    size_half_points: usize,
}

impl DocxAssembler {
    /// Start a document with a title heading naming the source file and the
    /// translation target.
    pub fn new(source_name: &str, target_language: &str, config: &DocxConfig) -> Self {
        let title = format!(
            "OCR Results for {} (Translated to {})",
            source_name, target_language
        );
        let docx = Docx::new()
            .add_style(
                Style::new("Title", StyleType::Paragraph)
                    .name("Title")
                    .size(32)
                    .bold(),
            )
            .add_style(
                Style::new("Heading1", StyleType::Paragraph)
                    .name("Heading 1")
                    .size(26)
                    .bold(),
            )
            .add_paragraph(
                Paragraph::new()
                    .style("Title")
                    .add_run(Run::new().add_text(title)),
            );

        Self {
            docx,
            font: config.font.clone(),
            size_half_points: config.font_size_pt * 2,
        }
    }

    /// Add the level-1 heading for a page (1-based number).
    pub fn start_page(&mut self, page_number: usize) {
        let heading = Paragraph::new()
            .style("Heading1")
            .add_run(Run::new().add_text(format!("Page {}", page_number)));
        self.push(heading);
    }

    /// Append one recognized line as an indented paragraph.
    pub fn add_line(&mut self, line: &PositionedLine) {
        let indent_twips = (line.left_indent_pt * TWIPS_PER_POINT).round() as i32;
        let run = Run::new()
            .add_text(line.text.as_str())
            .size(self.size_half_points)
            .fonts(
                RunFonts::new()
                    .ascii(&self.font)
                    .hi_ansi(&self.font)
                    .east_asia(&self.font),
            );
        let paragraph = Paragraph::new()
            .add_run(run)
            .indent(Some(indent_twips), None, None, None);
        self.push(paragraph);
    }

    fn push(&mut self, paragraph: Paragraph) {
        let docx = std::mem::take(&mut self.docx);
        self.docx = docx.add_paragraph(paragraph);
    }

    /// Pack the document to `path`.
    pub fn save(self, path: &Path) -> Result<(), DocxError> {
        let file = std::fs::File::create(path)?;
        self.docx
            .build()
            .pack(file)
            .map_err(|e| DocxError::Pack(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assembler() -> DocxAssembler {
        DocxAssembler::new("scan.pdf", "vi", &DocxConfig::default())
    }

    #[test]
    fn document_xml_contains_headings_and_indented_lines() {
        let mut asm = assembler();
        asm.start_page(1);
        asm.add_line(&PositionedLine {
            text: "xin chào".to_string(),
            left_indent_pt: 123.45,
        });

        let built = asm.docx.build();
        let xml = String::from_utf8_lossy(&built.document).into_owned();

        assert!(xml.contains("OCR Results for scan.pdf (Translated to vi)"));
        assert!(xml.contains("Page 1"));
        assert!(xml.contains("xin chào"));
        // 123.45 pt rounds to 2469 twips.
        assert!(xml.contains("2469"));
    }

    #[test]
    fn zero_indent_line_sits_at_the_margin() {
        let mut asm = assembler();
        asm.start_page(1);
        asm.add_line(&PositionedLine {
            text: "margin".to_string(),
            left_indent_pt: 0.0,
        });

        let built = asm.docx.build();
        let xml = String::from_utf8_lossy(&built.document).into_owned();
        assert!(xml.contains("margin"));
    }

    #[tokio::test]
    async fn failed_translation_keeps_original_text_in_document() {
        use crate::layout::PageGeometry;
        use crate::translate::{translate_or_original, TranslationError, Translator};
        use async_trait::async_trait;

        struct FailingTranslator;

        #[async_trait]
        impl Translator for FailingTranslator {
            async fn translate(&self, _text: &str) -> Result<String, TranslationError> {
                Err(TranslationError::Api("no network in tests".to_string()))
            }
        }

        let geometry = PageGeometry { width: 1190, height: 1684 };
        let mut asm = assembler();
        asm.start_page(1);
        for (text, x0) in [("第一行", 0.0), ("第二行", 595.0)] {
            let translated = translate_or_original(&FailingTranslator, text).await;
            asm.add_line(&PositionedLine {
                text: translated,
                left_indent_pt: geometry.left_indent_pt(x0),
            });
        }

        let built = asm.docx.build();
        let xml = String::from_utf8_lossy(&built.document).into_owned();
        assert!(xml.contains("第一行"));
        assert!(xml.contains("第二行"));
    }

    #[test]
    fn saved_file_is_a_zip_archive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");

        let mut asm = assembler();
        asm.start_page(1);
        asm.add_line(&PositionedLine {
            text: "hello".to_string(),
            left_indent_pt: 10.0,
        });
        asm.save(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
