//! Record storage: an injected key-value store mirrored from in-memory
//! collections.

mod collection;
mod memory;
mod portal;
mod sqlite;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::error::FarmError;
use crate::models::{Farm, Partner, ValidationIssue};

pub use collection::Collection;
pub use memory::MemoryStore;
pub use portal::{Portal, FARMS_KEY, PARTNERS_KEY, WHITEPAPER_KEY};
pub use sqlite::SqliteStore;

/// String key-value persistence, the way a browser's local storage works.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, FarmError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), FarmError>;
    fn remove(&mut self, key: &str) -> Result<(), FarmError>;

    /// Apply several writes as one unit: `Some` sets a key, `None` removes it.
    ///
    /// Stores without transactions fall back to undoing the writes already
    /// made when a later one fails.
    fn write_batch(&mut self, batch: &[(&str, Option<&str>)]) -> Result<(), FarmError> {
        let mut previous: Vec<(&str, Option<String>)> = Vec::with_capacity(batch.len());
        for &(key, value) in batch {
            let before = self.get(key)?;
            let result = match value {
                Some(value) => self.set(key, value),
                None => self.remove(key),
            };
            if let Err(e) = result {
                for (key, before) in previous.into_iter().rev() {
                    let undo = match before {
                        Some(value) => self.set(key, &value),
                        None => self.remove(key),
                    };
                    if let Err(undo_err) = undo {
                        warn!(key, error = %undo_err, "failed to roll back batch write");
                    }
                }
                return Err(e);
            }
            previous.push((key, before));
        }
        Ok(())
    }
}

/// A record kept in a [`Collection`].
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Human-readable record kind used in messages ("farm", "partner").
    const KIND: &'static str;

    fn id(&self) -> Uuid;
    fn set_id(&mut self, id: Uuid);
    fn name(&self) -> &str;
    fn validate_all(&self) -> Vec<ValidationIssue>;
}

impl Record for Farm {
    const KIND: &'static str = "farm";

    fn id(&self) -> Uuid {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn validate_all(&self) -> Vec<ValidationIssue> {
        Farm::validate_all(self)
    }
}

impl Record for Partner {
    const KIND: &'static str = "partner";

    fn id(&self) -> Uuid {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn validate_all(&self) -> Vec<ValidationIssue> {
        Partner::validate_all(self)
    }
}
