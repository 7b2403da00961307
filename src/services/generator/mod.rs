use crate::error::{AppError, AppResult};

pub mod huggingface;

pub use huggingface::HuggingFaceGenerator;

/// Text-generation capability
///
/// One generator is built at startup and shared by all requests. Each call is
/// independent: implementations hold no per-request state.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates `num_samples` continuations of `prompt`
    ///
    /// Prompts longer than the model's context window are truncated, never
    /// rejected. Any failure of the underlying capability is reported as
    /// `AppError::GenerationUnavailable`.
    async fn generate(
        &self,
        prompt: &str,
        max_new_tokens: u32,
        num_samples: usize,
    ) -> AppResult<Vec<String>>;
}

/// Trims `samples` to exactly `expected` entries, failing if too few were produced
pub(crate) fn take_samples(mut samples: Vec<String>, expected: usize) -> AppResult<Vec<String>> {
    if samples.len() < expected {
        return Err(AppError::GenerationUnavailable(format!(
            "expected {} generated samples, got {}",
            expected,
            samples.len()
        )));
    }

    samples.truncate(expected);
    Ok(samples)
}
