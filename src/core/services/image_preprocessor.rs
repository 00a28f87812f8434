use std::path::Path;

use anyhow::{Context, Result};
use image::{DynamicImage, GrayImage};
use imageproc::contrast::{threshold, ThresholdType};

use crate::global_constants::{ERROR_CONTEXT_DECODE_IMAGE, LOG_TAG_PREPROCESS, THRESHOLD_CUTOFF};

pub fn load_receipt_image(image_path: &Path) -> Result<DynamicImage> {
    log::debug!("{} Decoding {:?}", LOG_TAG_PREPROCESS, image_path);

    image::ImageReader::open(image_path)
        .and_then(|reader| reader.with_guessed_format())
        .with_context(|| format!("{}: {}", ERROR_CONTEXT_DECODE_IMAGE, image_path.display()))?
        .decode()
        .with_context(|| format!("{}: {}", ERROR_CONTEXT_DECODE_IMAGE, image_path.display()))
}

/// Grayscale followed by an inverted binary threshold: pixels brighter than
/// the cutoff become black, everything else white.
///
/// Grayscale uses the `image` crate's Rec. 709 luma weights, not BT.601, so
/// saturated colours land differently near the cutoff (pure green is 182, not 150).
pub fn prepare_for_ocr(image: &DynamicImage) -> GrayImage {
    log::debug!(
        "{} Thresholding {}x{} image at {}",
        LOG_TAG_PREPROCESS,
        image.width(),
        image.height(),
        THRESHOLD_CUTOFF
    );

    threshold(&image.to_luma8(), THRESHOLD_CUTOFF, ThresholdType::BinaryInverted)
}
