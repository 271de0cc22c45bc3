//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Mapping;

/// Visit statistics for a single short link.
///
/// `created_at` is serialized as an RFC 3339 timestamp.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub url: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

impl From<Mapping> for StatsResponse {
    fn from(mapping: Mapping) -> Self {
        Self {
            url: mapping.original_url,
            clicks: mapping.clicks,
            created_at: mapping.created_at,
        }
    }
}
