//! Categorize free text with a local LLM and reclassify tag sets with a
//! fuzzy tag-similarity K-Nearest-Neighbors classifier.
//!
//! # Basic Usage
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use contextual::Classifier;
//!
//! let classifier = Classifier::builder()
//!     .with_k(5)
//!     .with_min_similarity(0.1)
//!     .add_entry(["cat", "animal"], "Pets")
//!     .add_entry(["carpet", "floor"], "Home")
//!     .build()?;
//!
//! let prediction = classifier.predict_with_neighbors(&["car"]);
//! println!("Predicted category: {:?}", prediction.category);
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! Prediction takes `&self`, so a built classifier can be shared through `Arc`:
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use contextual::Classifier;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let classifier = Arc::new(Classifier::builder()
//!     .add_entry(["cat"], "Pets")
//!     .build()?);
//!
//! let mut handles = vec![];
//! for _ in 0..3 {
//!     let classifier = Arc::clone(&classifier);
//!     handles.push(thread::spawn(move || {
//!         assert_eq!(classifier.predict(&["cat"]).as_deref(), Some("Pets"));
//!     }));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod categorizer;
pub mod config;
pub mod models;
pub mod pipeline;
pub mod store;

pub use classifier::{
    similarity, Classifier, ClassifierBuilder, ClassifierError, ClassifierInfo, Entry, Prediction, TagSet,
};
pub use categorizer::{Categorizer, CategorizeError};
pub use config::{AppConfig, CategorizerConfig, ConfigError, KnnSettings};
pub use models::{Categorization, StoredCategorization};
pub use pipeline::{reclassify, resolve, ReclassifyOutcome};
pub use store::{CategorizationStore, StoreError};

pub fn init_logger() {
    env_logger::init();
}
