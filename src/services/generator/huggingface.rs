/// Hugging Face text-generation client
///
/// Speaks the Inference API format (`POST {api_url}/models/{model}`), which
/// text-generation-inference servers also accept. The prompt is never echoed
/// back (`return_full_text = false`) so only the model's continuation is
/// matched against candidate names.
use crate::{
    config::Config,
    error::{AppError, AppResult},
    services::generator::{take_samples, TextGenerator},
};
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
    options: GenerationOptions,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    num_return_sequences: usize,
    return_full_text: bool,
    /// Prompt tokens kept; anything beyond is truncated server-side
    truncate: u32,
    do_sample: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
}

#[derive(Debug, Serialize)]
struct GenerationOptions {
    wait_for_model: bool,
    use_cache: bool,
}

#[derive(Debug, Deserialize)]
struct GeneratedSample {
    generated_text: String,
}

/// The Inference API answers with a list, text-generation-inference with a single object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GenerationResponse {
    Batch(Vec<GeneratedSample>),
    Single(GeneratedSample),
}

impl GenerationResponse {
    fn into_texts(self) -> Vec<String> {
        match self {
            GenerationResponse::Batch(samples) => {
                samples.into_iter().map(|s| s.generated_text).collect()
            }
            GenerationResponse::Single(sample) => vec![sample.generated_text],
        }
    }
}

#[derive(Clone)]
pub struct HuggingFaceGenerator {
    http_client: HttpClient,
    api_url: String,
    api_key: Option<String>,
    model: String,
    context_window: u32,
    seed: Option<u64>,
}

impl HuggingFaceGenerator {
    pub fn new(
        api_url: String,
        api_key: Option<String>,
        model: String,
        context_window: u32,
        seed: Option<u64>,
    ) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
            api_key,
            model,
            context_window,
            seed,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.generator_api_url.clone(),
            config.generator_api_key.clone(),
            config.model_name.clone(),
            config.context_window,
            config.generation_seed,
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}", self.api_url.trim_end_matches('/'), self.model)
    }

    /// Prompt budget left once room is reserved for the generated tokens
    fn prompt_token_budget(&self, max_new_tokens: u32) -> u32 {
        self.context_window.saturating_sub(max_new_tokens).max(1)
    }

    fn build_request<'a>(
        &self,
        prompt: &'a str,
        max_new_tokens: u32,
        num_samples: usize,
    ) -> GenerationRequest<'a> {
        GenerationRequest {
            inputs: prompt,
            parameters: GenerationParameters {
                max_new_tokens,
                num_return_sequences: num_samples,
                return_full_text: false,
                truncate: self.prompt_token_budget(max_new_tokens),
                do_sample: self.seed.is_some(),
                seed: self.seed,
            },
            options: GenerationOptions {
                wait_for_model: true,
                use_cache: false,
            },
        }
    }
}

#[async_trait::async_trait]
impl TextGenerator for HuggingFaceGenerator {
    async fn generate(
        &self,
        prompt: &str,
        max_new_tokens: u32,
        num_samples: usize,
    ) -> AppResult<Vec<String>> {
        let url = self.endpoint();
        let body = self.build_request(prompt, max_new_tokens, num_samples);

        tracing::debug!(
            model = %self.model,
            prompt_chars = prompt.len(),
            max_new_tokens,
            num_samples,
            "Requesting generation"
        );

        let mut request = self.http_client.post(&url).json(&body);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(error = %e, model = %self.model, "Generation request failed");
            AppError::GenerationUnavailable(format!("request to {} failed: {}", url, e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %body,
                model = %self.model,
                "Generation API request failed"
            );
            return Err(AppError::GenerationUnavailable(format!(
                "generation API returned status {}: {}",
                status, body
            )));
        }

        let parsed: GenerationResponse = response.json().await.map_err(|e| {
            AppError::GenerationUnavailable(format!("failed to parse generation response: {}", e))
        })?;

        let samples = take_samples(parsed.into_texts(), num_samples)?;

        tracing::info!(
            model = %self.model,
            samples = samples.len(),
            provider = "huggingface",
            "Generation completed"
        );

        Ok(samples)
    }
}
