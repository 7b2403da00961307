pub mod catalog;
pub mod generator;
pub mod pipeline;
pub mod preferences;
pub mod prompt;
pub mod resolution;

pub use catalog::CatalogStore;
pub use generator::{HuggingFaceGenerator, TextGenerator};
pub use pipeline::{PipelineSettings, RecommendationPipeline};
pub use preferences::PreferenceStore;
