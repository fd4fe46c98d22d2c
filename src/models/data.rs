use serde::{Deserialize, Serialize};

/// Raw candidates pulled out of OCR text, before any date interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedFields {
    pub name: Option<String>,
    pub date_text: Option<String>,
}

/// Structured result of extraction and interpretation.
///
/// Every field is independently optional; absence is the recognition-failure
/// signal, not an error. If `birth_date` is absent, `age` is absent too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub age: Option<i64>,
}

impl PersonRecord {
    /// Quality-failure signal: nothing recognizable was found on the card.
    pub fn is_unusable(&self) -> bool {
        self.name.is_none() && self.birth_date.is_none()
    }
}
