//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::error::{LinkError, StoreError};
use crate::utils::code_generator::{
    DEFAULT_CODE_LENGTH, MAX_GENERATION_ATTEMPTS, generate_unique_code_with,
};
use crate::utils::url_validator::{is_valid_url, normalize_url};

/// Tuning knobs for short code allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSettings {
    /// Length of generated codes.
    pub length: usize,
    /// Random draws per allocation before the generator falls back to `length + 1`.
    pub generation_attempts: usize,
    /// Store insert attempts before giving up with an internal error.
    pub insert_attempts: usize,
}

impl Default for CodeSettings {
    fn default() -> Self {
        Self {
            length: DEFAULT_CODE_LENGTH,
            generation_attempts: MAX_GENERATION_ATTEMPTS,
            insert_attempts: 8,
        }
    }
}

/// Service for creating and resolving short links.
///
/// Normalizes and validates input URLs, allocates collision-free codes and
/// counts visits on the redirect path.
pub struct LinkService<R: MappingRepository> {
    repository: Arc<R>,
    settings: CodeSettings,
}

impl<R: MappingRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>, settings: CodeSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Creates a short link for `raw_url`.
    ///
    /// # Flow
    ///
    /// 1. Trim surrounding whitespace
    /// 2. Prepend `https://` when no http(s) scheme is present
    /// 3. Validate scheme and host
    /// 4. Snapshot used codes, generate a fresh code, insert if absent
    /// 5. On a lost race for the code, go back to step 4
    ///
    /// # Errors
    ///
    /// - [`LinkError::EmptyInput`] if the URL is blank
    /// - [`LinkError::InvalidUrl`] if validation fails
    /// - [`LinkError::Internal`] if every insert attempt collided
    pub fn shorten(&self, raw_url: &str) -> Result<Mapping, LinkError> {
        let trimmed = raw_url.trim();
        if trimmed.is_empty() {
            return Err(LinkError::EmptyInput);
        }

        let normalized = normalize_url(trimmed);
        if !is_valid_url(&normalized) {
            return Err(LinkError::InvalidUrl { url: normalized });
        }

        let mut rng = rand::rng();

        for attempt in 1..=self.settings.insert_attempts {
            let existing = self.repository.all_codes();
            let code = generate_unique_code_with(
                &mut rng,
                &existing,
                self.settings.length,
                self.settings.generation_attempts,
            );

            match self.repository.insert_if_absent(&code, &normalized) {
                Ok(mapping) => {
                    tracing::info!(code = %mapping.short_code, url = %mapping.original_url, "Short link created");
                    return Ok(mapping);
                }
                Err(StoreError::CodeTaken(code)) => {
                    tracing::warn!(%code, attempt, "Short code collision, retrying");
                }
            }
        }

        Err(LinkError::Internal(format!(
            "failed to allocate a unique short code after {} attempts",
            self.settings.insert_attempts
        )))
    }

    /// Looks up a short link without counting a visit.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if no mapping matches the code.
    pub fn resolve(&self, code: &str) -> Result<Mapping, LinkError> {
        self.repository.get(code).ok_or_else(|| LinkError::NotFound {
            code: code.to_string(),
        })
    }

    /// Looks up a short link and counts one visit, atomically.
    ///
    /// The returned snapshot already includes this visit.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if no mapping matches the code.
    pub fn follow(&self, code: &str) -> Result<Mapping, LinkError> {
        let mapping = self
            .repository
            .fetch_and_increment(code)
            .ok_or_else(|| LinkError::NotFound {
                code: code.to_string(),
            })?;

        tracing::debug!(%code, clicks = mapping.clicks, "Short link followed");
        Ok(mapping)
    }
}
