use std::sync::Arc;

use crate::services::{
    CatalogStore, PipelineSettings, PreferenceStore, RecommendationPipeline, TextGenerator,
};

/// Shared application state
///
/// The generator inside the pipeline is created once at startup; every
/// request reuses it.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<RecommendationPipeline>,
    pub catalog: Arc<dyn CatalogStore>,
    pub preferences: Arc<dyn PreferenceStore>,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn CatalogStore>,
        generator: Arc<dyn TextGenerator>,
        preferences: Arc<dyn PreferenceStore>,
        settings: PipelineSettings,
    ) -> Self {
        let pipeline = RecommendationPipeline::new(catalog.clone(), generator, settings);

        Self {
            pipeline: Arc::new(pipeline),
            catalog,
            preferences,
        }
    }
}
