use log::info;
use serde::Serialize;

use crate::classifier::Classifier;
use crate::config::KnnSettings;
use crate::store::CategorizationStore;

/// Result of reclassifying a tag set against stored categorizations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReclassifyOutcome {
    /// The predicted category, or the fallback when nothing matched
    pub category: Option<String>,
    /// `true` when `category` came from the fallback rather than the classifier
    pub is_default_category: bool,
}

/// Predicts a category for `tags`, falling back to `fallback` on no match
pub fn resolve(classifier: &Classifier, tags: &[impl AsRef<str>], fallback: Option<&str>) -> ReclassifyOutcome {
    match classifier.predict(tags) {
        Some(category) => ReclassifyOutcome {
            category: Some(category),
            is_default_category: false,
        },
        None => ReclassifyOutcome {
            category: fallback.map(str::to_string),
            is_default_category: true,
        },
    }
}

/// Builds a classifier from a fresh snapshot of the store and resolves `tags`
pub async fn reclassify(
    store: &CategorizationStore,
    settings: KnnSettings,
    tags: &[impl AsRef<str>],
    fallback: Option<&str>,
) -> anyhow::Result<ReclassifyOutcome> {
    let entries = store.training_entries().await?;
    info!("Reclassifying against {} stored entries", entries.len());

    let classifier = Classifier::builder()
        .with_k(settings.k)
        .with_min_similarity(settings.min_similarity_threshold)
        .add_entries(entries)
        .build()?;

    let outcome = resolve(&classifier, tags, fallback);
    info!(
        "KNN result: {:?} (default: {})",
        outcome.category, outcome.is_default_category
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_wins_over_fallback() {
        let classifier = Classifier::builder()
            .add_entry(["cat", "animal"], "Pets")
            .build()
            .unwrap();
        let outcome = resolve(&classifier, &["cat", "animal"], Some("Suggested"));
        assert_eq!(outcome.category.as_deref(), Some("Pets"));
        assert!(!outcome.is_default_category);
    }

    #[test]
    fn test_fallback_on_no_match() {
        let classifier = Classifier::builder().build().unwrap();
        let outcome = resolve(&classifier, &["cat"], Some("Suggested"));
        assert_eq!(outcome.category.as_deref(), Some("Suggested"));
        assert!(outcome.is_default_category);

        let outcome = resolve(&classifier, &["cat"], None);
        assert_eq!(outcome.category, None);
        assert!(outcome.is_default_category);
    }
}
