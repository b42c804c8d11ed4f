use std::collections::HashSet;

/// A normalized, case-insensitive set of free-form tags.
///
/// Tags are lower-cased and deduplicated on construction, so every comparison
/// made against a `TagSet` already treats it as a set. The first occurrence
/// order of each tag is retained to keep debug output deterministic.
///
/// ```
/// use contextual::TagSet;
///
/// let tags = TagSet::new(["Rust", "rust", "Cargo"]);
/// assert_eq!(tags.len(), 2);
/// assert!(tags.contains("rust"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    /// Normalizes the given tags into a set
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let tags = tags
            .into_iter()
            .map(|tag| tag.as_ref().to_lowercase())
            .filter(|tag| seen.insert(tag.clone()))
            .collect();
        Self { tags }
    }

    /// Number of distinct (normalized) tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Exact membership test against an already lower-cased tag
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
