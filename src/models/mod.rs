pub mod data;

pub use data::{ExtractedFields, PersonRecord};
