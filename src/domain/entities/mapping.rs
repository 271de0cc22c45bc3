//! Mapping entity binding a short code to its original URL.

use chrono::{DateTime, Utc};

/// A short code to URL binding with its visit counter.
///
/// `original_url`, `short_code` and `created_at` never change after creation;
/// `clicks` only ever grows. Values handed out by the store are snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
}

impl Mapping {
    /// Creates a fresh mapping with zero clicks, timestamped now.
    pub fn new(short_code: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            short_code: short_code.into(),
            created_at: Utc::now(),
            clicks: 0,
        }
    }

    /// Counts one visit.
    pub(crate) fn record_click(&mut self) {
        self.clicks = self.clicks.saturating_add(1);
    }
}
