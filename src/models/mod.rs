pub mod catalog;
pub mod preferences;
pub mod recommendation;

pub use catalog::{CandidateSet, CatalogEntry, FeatureValue};
pub use preferences::{PreferenceProfile, StoredPreferences};
pub use recommendation::Recommendation;
