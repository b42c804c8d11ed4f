use log::info;

use super::classifier::{Classifier, DEFAULT_K, DEFAULT_MIN_SIMILARITY};
use super::entry::Entry;
use super::error::ClassifierError;

/// A builder for constructing a Classifier with a fluent interface.
///
/// Settings are validated once in [`build`](Self::build), so an invalid `k`
/// or threshold fails at construction rather than at prediction time.
#[derive(Debug, Clone)]
pub struct ClassifierBuilder {
    k: usize,
    min_similarity_threshold: f32,
    entries: Vec<Entry>,
}

impl Default for ClassifierBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassifierBuilder {
    /// Creates a new builder with `k = 5` and a threshold of `0.1`
    ///
    /// # Example
    /// ```
    /// use contextual::ClassifierBuilder;
    ///
    /// let builder = ClassifierBuilder::new();
    /// ```
    pub fn new() -> Self {
        Self {
            k: DEFAULT_K,
            min_similarity_threshold: DEFAULT_MIN_SIMILARITY,
            entries: Vec::new(),
        }
    }

    /// Sets how many nearest neighbors take part in the vote
    ///
    /// # Arguments
    /// * `k` - Number of neighbors; must be at least 1
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Sets the minimum similarity the best neighbor must reach
    ///
    /// # Arguments
    /// * `threshold` - A value in `[0, 1]`; predictions whose best neighbor
    ///   scores strictly below it are rejected
    pub fn with_min_similarity(mut self, threshold: f32) -> Self {
        self.min_similarity_threshold = threshold;
        self
    }

    /// Adds a historical entry from raw tags and its category
    ///
    /// # Example
    /// ```
    /// use contextual::ClassifierBuilder;
    ///
    /// let builder = ClassifierBuilder::new()
    ///     .add_entry(["programming", "rust"], "Tech")
    ///     .add_entry(["football"], "Sports");
    /// ```
    pub fn add_entry<I, S>(mut self, tags: I, category: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.entries.push(Entry::new(tags, category));
        self
    }

    /// Adds a batch of entries, keeping their order
    pub fn add_entries(mut self, entries: impl IntoIterator<Item = Entry>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Builds and returns the final Classifier instance
    ///
    /// # Returns
    /// * `Result<Classifier, ClassifierError>` - The constructed Classifier, or an error if:
    ///   - `k` is zero
    ///   - The threshold is not a finite value in `[0, 1]`
    ///
    /// An empty entry set is valid; such a classifier never finds a match.
    pub fn build(self) -> Result<Classifier, ClassifierError> {
        Classifier::validate_settings(self.k, self.min_similarity_threshold)?;
        info!(
            "Built classifier with {} entries (k = {}, min similarity = {})",
            self.entries.len(),
            self.k,
            self.min_similarity_threshold
        );
        Ok(Classifier::from_parts(self.k, self.min_similarity_threshold, self.entries))
    }
}
