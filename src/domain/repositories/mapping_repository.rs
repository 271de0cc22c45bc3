//! Repository trait for short code mappings.

use std::collections::HashSet;

use crate::domain::entities::Mapping;
use crate::error::StoreError;

/// Store of short code mappings.
///
/// Every method is a single atomic operation: no interleaving of calls can
/// observe or produce a half-applied change. Returned mappings are owned
/// snapshots; the only way to change stored state is through these methods.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryMappingRepository`] - process-local table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait MappingRepository: Send + Sync {
    /// Inserts a mapping with zero clicks, replacing any existing entry for `code`.
    fn create(&self, code: &str, original_url: &str) -> Mapping;

    /// Inserts a mapping with zero clicks unless `code` is already taken.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CodeTaken`] if `code` exists; the stored entry is
    /// left untouched.
    fn insert_if_absent(&self, code: &str, original_url: &str) -> Result<Mapping, StoreError>;

    /// Returns a snapshot of the mapping for `code`.
    fn get(&self, code: &str) -> Option<Mapping>;

    /// Increments the click counter for `code`. Returns `false` if absent.
    fn increment_clicks(&self, code: &str) -> bool;

    /// Increments the click counter and returns the updated snapshot.
    fn fetch_and_increment(&self, code: &str) -> Option<Mapping>;

    /// Returns a copy of every code currently in use.
    fn all_codes(&self) -> HashSet<String>;

    /// Number of stored mappings.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
