//! In-memory implementation of the mapping repository.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::error::StoreError;

/// Process-local mapping table guarded by a single lock.
///
/// Lookups and snapshots share a read lock; inserts and click increments take
/// the write lock. Each operation holds the lock for exactly one step, so all
/// operations are linearizable. State is lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryMappingRepository {
    mappings: RwLock<HashMap<String, Mapping>>,
}

impl InMemoryMappingRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl MappingRepository for InMemoryMappingRepository {
    fn create(&self, code: &str, original_url: &str) -> Mapping {
        let mapping = Mapping::new(code, original_url);
        self.mappings.write().insert(code.to_string(), mapping.clone());
        mapping
    }

    fn insert_if_absent(&self, code: &str, original_url: &str) -> Result<Mapping, StoreError> {
        match self.mappings.write().entry(code.to_string()) {
            Entry::Occupied(_) => Err(StoreError::CodeTaken(code.to_string())),
            Entry::Vacant(slot) => Ok(slot.insert(Mapping::new(code, original_url)).clone()),
        }
    }

    fn get(&self, code: &str) -> Option<Mapping> {
        self.mappings.read().get(code).cloned()
    }

    fn increment_clicks(&self, code: &str) -> bool {
        match self.mappings.write().get_mut(code) {
            Some(mapping) => {
                mapping.record_click();
                true
            }
            None => false,
        }
    }

    fn fetch_and_increment(&self, code: &str) -> Option<Mapping> {
        let mut mappings = self.mappings.write();
        let mapping = mappings.get_mut(code)?;
        mapping.record_click();
        Some(mapping.clone())
    }

    fn all_codes(&self) -> HashSet<String> {
        self.mappings.read().keys().cloned().collect()
    }

    fn len(&self) -> usize {
        self.mappings.read().len()
    }
}
