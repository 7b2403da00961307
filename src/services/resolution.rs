use crate::models::{CandidateSet, CatalogEntry};

/// Maps generated free text back to one of the candidates it was shown
///
/// Returns the first candidate (in set order) whose name occurs in the text,
/// ignoring case. When no name occurs, falls back to the first candidate.
/// Returns `None` only for an empty set. Names are literal substrings, so an
/// empty name occurs in every text.
pub fn resolve<'a>(generated_text: &str, candidates: &'a CandidateSet) -> Option<&'a CatalogEntry> {
    let haystack = generated_text.to_lowercase();

    let matched = candidates
        .iter()
        .find(|entry| haystack.contains(&entry.name.to_lowercase()));

    match matched {
        Some(entry) => {
            tracing::debug!(product_id = %entry.id, name = %entry.name, "Generated text names a candidate");
            Some(entry)
        }
        None => {
            let fallback = candidates.first();
            if let Some(entry) = fallback {
                tracing::debug!(
                    product_id = %entry.id,
                    "Generated text names no candidate, falling back to first"
                );
            }
            fallback
        }
    }
}
