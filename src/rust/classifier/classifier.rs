use log::{debug, info};

use super::builder::ClassifierBuilder;
use super::entry::Entry;
use super::error::ClassifierError;
use super::tags::TagSet;
use super::voting::vote;

/// Number of neighbors consulted when none is configured
pub const DEFAULT_K: usize = 5;
/// Minimum best-neighbor similarity required when none is configured
pub const DEFAULT_MIN_SIMILARITY: f32 = 0.1;

/// A tag-similarity K-Nearest-Neighbors classifier.
///
/// Holds the historical entries plus the fixed `k` and similarity threshold.
/// Entries may only be appended; prediction never mutates state, so a built
/// classifier can be shared read-only across threads.
///
/// ```rust
/// use contextual::Classifier;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let classifier = Classifier::builder()
///     .with_k(3)
///     .with_min_similarity(0.2)
///     .add_entry(["cat", "animal"], "Pets")
///     .add_entry(["car", "engine"], "Vehicles")
///     .build()?;
///
/// assert_eq!(classifier.predict(&["Cat"]).as_deref(), Some("Pets"));
/// assert_eq!(classifier.predict(&["boat"]), None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    k: usize,
    min_similarity_threshold: f32,
    entries: Vec<Entry>,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Classifier>();
    }
};

/// Detailed result of a prediction
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Winning category, `None` when no confident match exists
    pub category: Option<String>,
    /// The top-K neighbors as `(category, similarity)` in rank order
    pub neighbors: Vec<(String, f32)>,
    /// Accumulated similarity per category in order of first appearance;
    /// empty when the vote was rejected
    pub weights: Vec<(String, f32)>,
}

impl Prediction {
    /// Similarity of the best neighbor, 0.0 when there were none
    pub fn best_similarity(&self) -> f32 {
        self.neighbors.first().map_or(0.0, |(_, s)| *s)
    }

    /// Accumulated weight of `category`, if it took part in the vote
    pub fn weight(&self, category: &str) -> Option<f32> {
        self.weights
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, w)| *w)
    }
}

impl Classifier {
    /// Creates a new ClassifierBuilder for fluent construction
    pub fn builder() -> ClassifierBuilder {
        ClassifierBuilder::new()
    }

    /// Creates an empty classifier, validating `k` and the threshold
    pub fn new(k: usize, min_similarity_threshold: f32) -> Result<Self, ClassifierError> {
        Self::validate_settings(k, min_similarity_threshold)?;
        Ok(Self {
            k,
            min_similarity_threshold,
            entries: Vec::new(),
        })
    }

    pub(crate) fn validate_settings(k: usize, min_similarity_threshold: f32) -> Result<(), ClassifierError> {
        if k < 1 {
            return Err(ClassifierError::InvalidK(k));
        }
        if !min_similarity_threshold.is_finite() || !(0.0..=1.0).contains(&min_similarity_threshold) {
            return Err(ClassifierError::InvalidThreshold(min_similarity_threshold));
        }
        Ok(())
    }

    pub(crate) fn from_parts(k: usize, min_similarity_threshold: f32, entries: Vec<Entry>) -> Self {
        Self {
            k,
            min_similarity_threshold,
            entries,
        }
    }

    /// Appends a historical entry
    pub fn add_entry<I, S>(&mut self, tags: I, category: impl Into<String>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.entries.push(Entry::new(tags, category));
    }

    /// Appends an already constructed entry
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn min_similarity_threshold(&self) -> f32 {
        self.min_similarity_threshold
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns information about the classifier's current state
    pub fn info(&self) -> super::ClassifierInfo {
        let mut categories: Vec<String> = Vec::new();
        for entry in &self.entries {
            if !categories.iter().any(|c| c == entry.category()) {
                categories.push(entry.category().to_string());
            }
        }
        super::ClassifierInfo {
            k: self.k,
            min_similarity_threshold: self.min_similarity_threshold,
            num_entries: self.entries.len(),
            categories,
        }
    }

    /// Predicts a category for the given tags, `None` when no confident match exists
    pub fn predict(&self, tags: &[impl AsRef<str>]) -> Option<String> {
        self.predict_with_neighbors(tags).category
    }

    /// Predicts a category and returns the neighbors and weights behind it
    pub fn predict_with_neighbors(&self, tags: &[impl AsRef<str>]) -> Prediction {
        let query = TagSet::new(tags);
        self.predict_tag_set(&query)
    }

    /// Predicts against an already normalized query
    pub fn predict_tag_set(&self, query: &TagSet) -> Prediction {
        let result = vote(query, &self.entries, self.k, self.min_similarity_threshold);

        match result.winner {
            Some(category) => info!(
                "Predicted '{}' from {} neighbors ({} entries)",
                category,
                result.neighbors.len(),
                self.entries.len()
            ),
            None => debug!("No confident match among {} entries", self.entries.len()),
        }

        Prediction {
            category: result.winner.map(str::to_string),
            neighbors: result
                .neighbors
                .iter()
                .map(|n| (n.category.to_string(), n.similarity))
                .collect(),
            weights: result
                .weights
                .iter()
                .map(|(category, weight)| (category.to_string(), *weight))
                .collect(),
        }
    }
}
