pub mod extractors;
pub mod image_processor;
pub mod ocr;

pub use extractors::FieldExtractor;
pub use image_processor::ImageProcessor;
pub use ocr::OcrProcessor;
