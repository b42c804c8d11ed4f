use super::tags::TagSet;

/// A historical `{tags, category}` pair the classifier votes with.
///
/// Entries are immutable once created; the tag set is normalized at
/// construction time so ranking never re-normalizes stored tags.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    tags: TagSet,
    category: String,
}

impl Entry {
    /// Creates a new entry from raw tags and a category label
    ///
    /// # Example
    /// ```
    /// use contextual::Entry;
    ///
    /// let entry = Entry::new(["Cat", "animal"], "Pets");
    /// assert_eq!(entry.category(), "Pets");
    /// assert!(entry.tags().contains("cat"));
    /// ```
    pub fn new<I, S>(tags: I, category: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tags: TagSet::new(tags),
            category: category.into(),
        }
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}
