use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::Mutex;

use crate::classifier::Entry;
use crate::models::{Categorization, StoredCategorization};

const STORE_FILE: &str = "categorizations.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Store file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    next_id: u64,
    records: Vec<StoredCategorization>,
}

impl StoreFile {
    fn allocate_id(&mut self) -> u64 {
        let highest = self.records.iter().map(|r| r.id).max().unwrap_or(0);
        let id = self.next_id.max(highest + 1);
        self.next_id = id + 1;
        id
    }
}

/// Durable store of categorizations backed by a single JSON file.
///
/// Every operation reads the file fresh, so callers always see a consistent
/// snapshot. Mutations are serialized through an async lock and written via
/// a temporary file that replaces the original.
#[derive(Clone, Debug)]
pub struct CategorizationStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl CategorizationStore {
    /// Opens (creating if needed) the store inside `data_dir`
    pub fn open<P: AsRef<Path>>(data_dir: P) -> io::Result<Self> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir)?;
        Ok(Self {
            path: data_dir.join(STORE_FILE),
            lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persists a categorization and returns its id
    pub async fn insert(&self, input_text: &str, categorization: &Categorization) -> Result<u64, StoreError> {
        let _lock = self.lock.lock().await;
        let mut file = self.load().await?;
        let id = file.allocate_id();
        file.records.push(StoredCategorization {
            id,
            input_text: input_text.to_string(),
            category: categorization.category.clone(),
            description: categorization.description.clone(),
            tags: categorization.tags.clone(),
            created_at: Utc::now(),
        });
        self.save(&file).await?;
        log::info!("Stored categorization {} ('{}')", id, categorization.category);
        Ok(id)
    }

    /// Returns up to `limit` categorizations, newest first
    pub async fn recent(&self, limit: usize) -> Result<Vec<StoredCategorization>, StoreError> {
        let _lock = self.lock.lock().await;
        let mut records = self.load().await?.records;
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        records.truncate(limit);
        Ok(records)
    }

    pub async fn count(&self) -> Result<usize, StoreError> {
        let _lock = self.lock.lock().await;
        Ok(self.load().await?.records.len())
    }

    /// Deletes a categorization; returns whether it existed
    pub async fn delete(&self, id: u64) -> Result<bool, StoreError> {
        let _lock = self.lock.lock().await;
        let mut file = self.load().await?;
        let before = file.records.len();
        file.records.retain(|r| r.id != id);
        let removed = file.records.len() != before;
        if removed {
            self.save(&file).await?;
            log::info!("Deleted categorization {}", id);
        } else {
            log::warn!("Categorization {} not found", id);
        }
        Ok(removed)
    }

    /// Removes every categorization; returns how many were removed
    pub async fn clear(&self) -> Result<usize, StoreError> {
        let _lock = self.lock.lock().await;
        let mut file = self.load().await?;
        let removed = file.records.len();
        file.records.clear();
        self.save(&file).await?;
        log::info!("Cleared {} categorizations", removed);
        Ok(removed)
    }

    /// Snapshot of every stored `{tags, category}` pair, oldest first
    pub async fn training_entries(&self) -> Result<Vec<Entry>, StoreError> {
        let _lock = self.lock.lock().await;
        let file = self.load().await?;
        log::debug!("Loaded {} training entries from {:?}", file.records.len(), self.path);
        Ok(file
            .records
            .into_iter()
            .map(|r| Entry::new(r.tags, r.category))
            .collect())
    }

    async fn load(&self) -> Result<StoreFile, StoreError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(StoreFile::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, file: &StoreFile) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(file)?;
        let tmp_path = self.path.with_extension("json.tmp");
        let written = match fs::write(&tmp_path, bytes).await {
            Ok(()) => fs::rename(&tmp_path, &self.path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            log::error!("Failed to write {:?}: {}", self.path, e);
            let _ = fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }
        Ok(())
    }
}
