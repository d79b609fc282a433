//! PDF Babel
//!
//! Batch-converts every PDF in the input folder into a translated Word
//! document, rendering pages to high-resolution bitmaps and running OCR to
//! recover text with approximate positions.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pdf_babel::batch::BatchRunner;
use pdf_babel::config::{Config, OcrEngineKind};
use pdf_babel::ocr::{OcrEngine, PaddleServerEngine, TesseractEngine};
use pdf_babel::translate::GoogleWebTranslator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdf_babel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::default();

    tracing::info!("Starting pdf-babel v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Input folder: {}", config.paths.input_dir.display());
    tracing::info!(
        "Translating {} -> {}",
        config.translate.source,
        config.translate.target
    );

    let ocr: Arc<dyn OcrEngine> = match config.ocr.engine {
        OcrEngineKind::Paddle => Arc::new(PaddleServerEngine::new(&config.ocr.paddle)),
        OcrEngineKind::Tesseract => Arc::new(TesseractEngine::new(&config.ocr.tesseract)),
    };
    let translator = Arc::new(GoogleWebTranslator::new(&config.translate));

    let runner = BatchRunner::new(config, ocr, translator);
    let summary = runner.run().await.context("batch run failed")?;

    tracing::info!(
        "Done: {} file(s), {} page(s) processed",
        summary.files,
        summary.pages
    );
    Ok(())
}
