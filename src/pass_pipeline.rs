use chrono::{Local, NaiveDate};
use image::DynamicImage;

use crate::interpret::DobInterpreter;
use crate::models::{ExtractedFields, PersonRecord};
use crate::processing::FieldExtractor;

pub struct PassPipeline;

impl PassPipeline {
    pub fn new() -> Self {
        PassPipeline
    }

    /// Run extraction and interpretation over a decoded document image.
    ///
    /// A record with both name and birth date absent is the quality-failure
    /// signal; callers are expected to skip pass generation for it. No error
    /// is raised for that case.
    pub fn process(&self, image: &DynamicImage) -> PersonRecord {
        // Step 1: Pull raw name/date candidates out of the image
        let fields = FieldExtractor::extract(image);

        // Step 2: Interpret the raw date against today's wall clock
        let today = Local::now().naive_local().date();
        Self::assemble(fields, today)
    }

    fn assemble(fields: ExtractedFields, now: NaiveDate) -> PersonRecord {
        let (birth_date, age) = DobInterpreter::interpret(fields.date_text.as_deref(), now);
        PersonRecord {
            name: fields.name,
            birth_date,
            age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn unreadable_text_yields_an_unusable_record() {
        let fields = FieldExtractor::parse_text("@@!! ##2 zz%% ~~");
        let record = PassPipeline::assemble(fields, date(2024, 8, 20));
        assert_eq!(
            record,
            PersonRecord {
                name: None,
                birth_date: None,
                age: None,
            }
        );
        assert!(record.is_unusable());
    }

    #[test]
    fn bad_date_keeps_the_name_but_drops_date_and_age() {
        let fields = FieldExtractor::parse_text("JOHN MICHAEL SMITH DOE \nDOB: 31/02/2020");
        let record = PassPipeline::assemble(fields, date(2024, 8, 20));
        assert_eq!(record.name.as_deref(), Some("JOHN MICHAEL SMITH DOE"));
        assert!(record.birth_date.is_none());
        assert!(record.age.is_none());
        assert!(!record.is_unusable());
    }

    #[test]
    fn full_extraction_produces_a_complete_record() {
        let fields = FieldExtractor::parse_text("JOHN MICHAEL SMITH DOE \nDOB: 15/08/1990");
        let record = PassPipeline::assemble(fields, date(2024, 8, 20));
        assert_eq!(
            record,
            PersonRecord {
                name: Some("JOHN MICHAEL SMITH DOE".to_string()),
                birth_date: Some("15/08/1990".to_string()),
                age: Some(34),
            }
        );
    }
}
