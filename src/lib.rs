pub mod models;
pub mod processing;
pub mod interpret;
pub mod render;
pub mod utils;
pub mod pass_pipeline;

pub use pass_pipeline::PassPipeline;
