pub mod pass;

pub use pass::{PassRenderer, DEFAULT_PASS_PATH};
