use crate::{error::AppResult, models::CandidateSet};

/// Read-only product catalog lookup
///
/// Implementations must return entries in a stable order so that repeated
/// requests over unchanged data render byte-identical prompts.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogStore: Send + Sync {
    /// Returns at most `limit` entries whose category equals `category` exactly
    ///
    /// No matching entries is not an error: an empty set is returned and the
    /// caller decides what that means.
    async fn candidates_for(&self, category: &str, limit: usize) -> AppResult<CandidateSet>;

    /// Store name for logging
    fn name(&self) -> &'static str;
}
