use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use image::GrayImage;
use rusty_tesseract::{Args, Image as TesseractImage};
use tempfile::NamedTempFile;

use crate::core::interfaces::adapters::OcrService;
use crate::core::models::OcrResult;

pub struct TesseractOcrService {
    language: String,
    scratch_directory: PathBuf,
}

impl TesseractOcrService {
    pub fn build(language: &str) -> Result<Self> {
        Self::build_in(language, std::env::temp_dir())
    }

    pub fn build_in(language: &str, scratch_directory: PathBuf) -> Result<Self> {
        log::info!(
            "[TESSERACT_OCR] Initializing Tesseract OCR service (language: {})",
            language
        );
        Ok(Self {
            language: language.to_string(),
            scratch_directory,
        })
    }

    /// The returned file is removed when it is dropped.
    fn write_scratch_image(&self, image: &GrayImage) -> Result<NamedTempFile> {
        let scratch_file = tempfile::Builder::new()
            .prefix("receipts_to_budget_")
            .suffix(".png")
            .tempfile_in(&self.scratch_directory)
            .context("Failed to create scratch image file")?;

        image
            .save_with_format(scratch_file.path(), image::ImageFormat::Png)
            .context("Failed to prepare image for OCR")?;

        Ok(scratch_file)
    }

    fn run_tesseract(&self, image_path: &Path) -> Result<String> {
        let tesseract_image =
            TesseractImage::from_path(image_path).context("Failed to create Tesseract image")?;

        let args = Args {
            lang: self.language.clone(),
            ..Args::default()
        };

        rusty_tesseract::image_to_string(&tesseract_image, &args)
            .context("Failed to extract text from image")
    }
}

#[async_trait]
impl OcrService for TesseractOcrService {
    async fn extract_text_from_image(&self, image: &GrayImage) -> Result<OcrResult> {
        log::info!("[TESSERACT_OCR] Starting text extraction");
        log::debug!(
            "[TESSERACT_OCR] Image dimensions: {}x{}",
            image.width(),
            image.height()
        );

        let scratch_file = self.write_scratch_image(image)?;
        let extracted_text = self.run_tesseract(scratch_file.path())?;
        drop(scratch_file);

        log::info!(
            "[TESSERACT_OCR] Text extraction complete. Extracted {} characters",
            extracted_text.len()
        );
        log::debug!("[TESSERACT_OCR] Extracted text: {}", extracted_text);

        Ok(OcrResult {
            full_text: extracted_text,
        })
    }
}
