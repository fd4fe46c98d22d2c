use chrono::NaiveDate;
use log::debug;

/// Canonical card date representation.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

pub struct DobInterpreter;

impl DobInterpreter {
    /// Parse a raw OCR date string and derive the age at `now`.
    ///
    /// Age is elapsed days divided by 365, so it can run a day ahead of the
    /// calendar age once enough leap days accumulate. The parsed date is
    /// reformatted, which normalizes unpadded day or month components.
    /// Malformed and impossible dates downgrade both results to absent
    /// instead of failing the pipeline.
    pub fn interpret(raw_date: Option<&str>, now: NaiveDate) -> (Option<String>, Option<i64>) {
        let raw = match raw_date {
            Some(raw) => raw,
            None => return (None, None),
        };

        match NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT) {
            Ok(birth_date) => {
                let age = (now - birth_date).num_days() / 365;
                (Some(birth_date.format(DATE_FORMAT).to_string()), Some(age))
            }
            Err(e) => {
                debug!("Discarding unparseable date {:?}: {}", raw, e);
                (None, None)
            }
        }
    }
}
