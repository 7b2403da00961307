use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::instrument;

use crate::{
    error::{AppError, AppResult},
    models::{PreferenceProfile, Recommendation},
    services::{catalog::CatalogStore, generator::TextGenerator, prompt, resolution},
};

/// Generated samples requested per recommendation
const SAMPLES_PER_REQUEST: usize = 1;

/// Tunables for the recommendation pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSettings {
    /// Category used when a preference names none
    pub fallback_category: Option<String>,
    /// Maximum candidates shown to the model
    pub candidate_limit: usize,
    pub max_new_tokens: u32,
    pub generation_timeout: Duration,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            fallback_category: Some("Home Decor".to_string()),
            candidate_limit: 5,
            max_new_tokens: 50,
            generation_timeout: Duration::from_secs(30),
        }
    }
}

/// Turns a preference profile into a single recommended catalog entry
///
/// Flow: catalog lookup → prompt → generation → resolution. The catalog and
/// generator are shared across requests; everything else is built per call.
#[derive(Clone)]
pub struct RecommendationPipeline {
    catalog: Arc<dyn CatalogStore>,
    generator: Arc<dyn TextGenerator>,
    settings: PipelineSettings,
}

impl RecommendationPipeline {
    pub fn new(
        catalog: Arc<dyn CatalogStore>,
        generator: Arc<dyn TextGenerator>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            catalog,
            generator,
            settings,
        }
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Category to recommend from: the preferred one if present, else the configured fallback
    pub fn resolve_category<'a>(&'a self, preference: &'a PreferenceProfile) -> AppResult<&'a str> {
        preference
            .category()
            .or(self.settings.fallback_category.as_deref())
            .ok_or_else(|| {
                AppError::InvalidPreference(
                    "preference has no preferred_category and no fallback category is configured"
                        .to_string(),
                )
            })
    }

    /// Recommends one catalog entry for `preference`
    ///
    /// Fails with `NoCandidatesAvailable` when the category has no entries and
    /// with `GenerationUnavailable` when the model fails or times out. Output
    /// that names no candidate resolves to the first candidate.
    #[instrument(skip_all, fields(category = tracing::field::Empty))]
    pub async fn recommend(&self, preference: &PreferenceProfile) -> AppResult<Recommendation> {
        let start = Instant::now();
        let category = self.resolve_category(preference)?;
        tracing::Span::current().record("category", category);

        let candidates = self
            .catalog
            .candidates_for(category, self.settings.candidate_limit)
            .await?;

        if candidates.is_empty() {
            tracing::warn!(store = self.catalog.name(), "No catalog entries for category");
            return Err(AppError::NoCandidatesAvailable {
                category: category.to_string(),
            });
        }

        tracing::debug!(candidates = candidates.len(), "Candidates retrieved");

        let prompt = prompt::build(category, &candidates);
        let samples = self.generate(&prompt).await?;
        let generated = samples.first().ok_or_else(|| {
            AppError::GenerationUnavailable("generator returned no samples".to_string())
        })?;

        let entry = resolution::resolve(generated, &candidates)
            .cloned()
            .ok_or_else(|| AppError::NoCandidatesAvailable {
                category: category.to_string(),
            })?;

        tracing::info!(
            product_id = %entry.id,
            name = %entry.name,
            candidates = candidates.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Recommendation resolved"
        );

        Ok(Recommendation::new(entry))
    }

    /// Runs the generator under the configured timeout
    async fn generate(&self, prompt: &str) -> AppResult<Vec<String>> {
        let timeout = self.settings.generation_timeout;
        let call = self
            .generator
            .generate(prompt, self.settings.max_new_tokens, SAMPLES_PER_REQUEST);

        match tokio::time::timeout(timeout, call).await {
            Ok(Ok(samples)) => Ok(samples),
            Ok(Err(AppError::GenerationUnavailable(msg))) => {
                Err(AppError::GenerationUnavailable(msg))
            }
            Ok(Err(other)) => Err(AppError::GenerationUnavailable(other.to_string())),
            Err(_) => {
                tracing::error!(timeout_ms = timeout.as_millis() as u64, "Generation timed out");
                Err(AppError::GenerationUnavailable(format!(
                    "generation timed out after {}ms",
                    timeout.as_millis()
                )))
            }
        }
    }
}
