mod error;
mod tags;
mod entry;
mod similarity;
mod ranking;
mod voting;
mod classifier;
pub mod builder;

pub use error::ClassifierError;
pub use tags::TagSet;
pub use entry::Entry;
pub use similarity::similarity;
pub use ranking::{rank, Neighbor};
pub use voting::{classify, vote, Vote};
pub use classifier::{Classifier, Prediction, DEFAULT_K, DEFAULT_MIN_SIMILARITY};
pub use builder::ClassifierBuilder;

/// Information about the current state and configuration of a classifier
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierInfo {
    /// Number of neighbors consulted per prediction
    pub k: usize,
    /// Minimum best-neighbor similarity for a prediction to stand
    pub min_similarity_threshold: f32,
    /// Number of historical entries
    pub num_entries: usize,
    /// Distinct categories, in order of first appearance
    pub categories: Vec<String>,
}
