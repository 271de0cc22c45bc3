//! Click statistics service.

use std::sync::Arc;

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::error::LinkError;

/// Service for reading per-link visit statistics.
pub struct StatsService<R: MappingRepository> {
    repository: Arc<R>,
}

impl<R: MappingRepository> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the mapping for `code` with its current click count.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if no mapping matches the code.
    pub fn stats(&self, code: &str) -> Result<Mapping, LinkError> {
        self.repository.get(code).ok_or_else(|| LinkError::NotFound {
            code: code.to_string(),
        })
    }

    /// Number of short links currently stored.
    pub fn total_links(&self) -> usize {
        self.repository.len()
    }
}
