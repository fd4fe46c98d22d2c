use std::io::{Cursor, Write};

use image::{DynamicImage, GrayImage, ImageFormat};
use tempfile::NamedTempFile;
use tesseract::Tesseract;

use crate::utils::PassError;

/// Thin wrapper around the external OCR engine. Accuracy of the recognized
/// text is outside this crate's control; callers treat a failed engine call
/// the same as an empty page.
pub struct OcrProcessor;

impl OcrProcessor {
    /// Recognize text on a binarized document image.
    pub fn recognize(image: &GrayImage) -> Result<String, PassError> {
        // Tesseract wants a file on disk, so round-trip through a temp PNG
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        DynamicImage::ImageLuma8(image.clone())
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|e| PassError::OcrError(format!("Failed to encode image for OCR: {}", e)))?;

        let mut temp_file = NamedTempFile::new()
            .map_err(|e| PassError::OcrError(format!("Failed to create temp file: {}", e)))?;

        temp_file
            .write_all(&buffer)
            .map_err(|e| PassError::OcrError(format!("Failed to write to temp file: {}", e)))?;

        let image_path = temp_file
            .path()
            .to_str()
            .ok_or_else(|| PassError::OcrError("Failed to convert path to string".to_string()))?;

        let text = Tesseract::new(None, Some("eng"))
            .map_err(|e| PassError::OcrError(format!("Tesseract init error: {}", e)))?
            .set_image(image_path)
            .map_err(|e| PassError::OcrError(format!("Tesseract set image error: {}", e)))?
            .get_text()
            .map_err(|e| PassError::OcrError(format!("Tesseract error: {}", e)))?;

        Ok(text)
    }
}
