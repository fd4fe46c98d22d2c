use image::DynamicImage;
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use crate::models::ExtractedFields;
use crate::processing::{ImageProcessor, OcrProcessor};

lazy_static! {
    // Name heuristics in priority order; the first rule that matches wins.
    static ref NAME_PATTERNS: Vec<Regex> = vec![
        // Document-style all-caps run with a trailing space, the way PAN-style
        // cards print the holder name
        Regex::new(r"[A-Z]+\s+[A-Z]+\s+[A-Z]+\s+[A-Za-z]+\s").unwrap(),
        // Title-case multi-word sequence for cards that print mixed-case names
        Regex::new(r"[A-Z][a-zA-Z\s]+[A-Z][a-zA-Z\s]+[A-Z][a-zA-Z]+").unwrap(),
    ];

    static ref DATE_PATTERN: Regex = Regex::new(r"\d{2}/\d{2}/\d{4}").unwrap();
}

/// FieldExtractor runs OCR over a preprocessed document image and applies
/// pattern heuristics to pull a name and a date string out of the noise.
pub struct FieldExtractor;

impl FieldExtractor {
    /// Extract name and date candidates from a decoded document image.
    ///
    /// A failed OCR call is treated as an empty page: both fields come back
    /// absent and no error is raised at this level.
    pub fn extract(image: &DynamicImage) -> ExtractedFields {
        let processed = ImageProcessor::preprocess(image);
        let text = match OcrProcessor::recognize(&processed) {
            Ok(text) => text,
            Err(e) => {
                warn!("OCR failed, treating page as empty: {}", e);
                String::new()
            }
        };
        debug!("Extracted text:\n{}", text);
        Self::parse_text(&text)
    }

    /// Apply the name and date heuristics to raw OCR output.
    pub fn parse_text(text: &str) -> ExtractedFields {
        ExtractedFields {
            name: Self::extract_name_from_text(text),
            date_text: Self::extract_date_from_text(text),
        }
    }

    fn extract_name_from_text(text: &str) -> Option<String> {
        for pattern in NAME_PATTERNS.iter() {
            if let Some(matched) = pattern.find(text) {
                let value = matched.as_str().trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
        None
    }

    fn extract_date_from_text(text: &str) -> Option<String> {
        DATE_PATTERN
            .find(text)
            .map(|matched| matched.as_str().trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_caps_rule_wins_over_title_case() {
        let text = "Jane Mary Doe\nJOHN MICHAEL SMITH DOE \nDOB: 15/08/1990";
        let fields = FieldExtractor::parse_text(text);
        assert_eq!(fields.name.as_deref(), Some("JOHN MICHAEL SMITH DOE"));
    }

    #[test]
    fn title_case_rule_is_the_fallback() {
        let fields = FieldExtractor::parse_text("visitor: Jane Mary Doe");
        assert_eq!(fields.name.as_deref(), Some("Jane Mary Doe"));
    }

    #[test]
    fn picks_up_a_slash_separated_date() {
        let fields = FieldExtractor::parse_text("DOB: 15/08/1990");
        assert_eq!(fields.date_text.as_deref(), Some("15/08/1990"));
    }

    #[test]
    fn first_date_in_the_text_wins() {
        let fields = FieldExtractor::parse_text("Issued 01/01/2020\nDOB 15/08/1990");
        assert_eq!(fields.date_text.as_deref(), Some("01/01/2020"));
    }

    #[test]
    fn unrecognizable_noise_yields_nothing() {
        let fields = FieldExtractor::parse_text("@@!! ##2 zz%% ~~");
        assert!(fields.name.is_none());
        assert!(fields.date_text.is_none());
    }
}
