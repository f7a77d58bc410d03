//! Append-only purchase history with whole-document JSON persistence.
//!
//! The file is read once at startup and rewritten in full after every
//! append. A missing or corrupt file is never surfaced to the user; the
//! session simply starts with an empty history.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("history io: {0}")]
    Io(#[from] std::io::Error),
    #[error("history serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One logged purchase. Never mutated or removed once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub item: String,
    /// Serialized in ISO form, "YYYY-MM-DD".
    pub date: NaiveDate,
}

/// On-disk layout: a single `{ "purchases": [...] }` document. No schema
/// versioning.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedHistory {
    purchases: Vec<HistoryRecord>,
}

pub struct PurchaseHistory {
    path: PathBuf,
    purchases: Vec<HistoryRecord>,
}

impl PurchaseHistory {
    /// Load from `path`, falling back to an empty history when the file is
    /// missing or unreadable.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let purchases = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<PersistedHistory>(&raw) {
                Ok(doc) => doc.purchases,
                Err(e) => {
                    warn!("corrupt history at {}: {e}; starting empty", path.display());
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };
        Self { path, purchases }
    }

    pub fn append(&mut self, item: &str, date: NaiveDate) {
        self.purchases.push(HistoryRecord {
            item: item.to_string(),
            date,
        });
    }

    /// Overwrite the whole document on disk.
    pub fn save(&self) -> Result<(), HistoryError> {
        #[derive(Serialize)]
        struct Doc<'a> {
            purchases: &'a [HistoryRecord],
        }
        let json = serde_json::to_string(&Doc {
            purchases: &self.purchases,
        })?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// The last `n` item names in stored order (oldest of the window first).
    pub fn recent_items(&self, n: usize) -> Vec<&str> {
        let skip = self.purchases.len().saturating_sub(n);
        self.purchases[skip..].iter().map(|r| r.item.as_str()).collect()
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.purchases
    }

    pub fn is_empty(&self) -> bool {
        self.purchases.is_empty()
    }

    pub fn len(&self) -> usize {
        self.purchases.len()
    }
}
