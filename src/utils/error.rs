use thiserror::Error;

#[derive(Debug, Error)]
pub enum PassError {
    #[error("Image processing error: {0}")]
    ImageProcessingError(String),
    #[error("OCR error: {0}")]
    OcrError(String),
    #[error("Render error: {0}")]
    RenderError(String),
}
