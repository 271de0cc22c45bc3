//! # Shortly
//!
//! A small in-memory URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The `Mapping` entity and the store contract
//! - **Application Layer** ([`application`]) - Shorten, resolve, redirect and stats facade
//! - **Infrastructure Layer** ([`infrastructure`]) - Lock-guarded in-memory store
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random 6-character alphanumeric codes with collision-free insertion
//! - Atomic click counting on redirect
//! - JSON error bodies with stable machine-readable codes
//!
//! State lives in process memory only and is lost on restart.
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! cargo run
//!
//! curl -X POST localhost:3000/api/shorten -H 'content-type: application/json' \
//!      -d '{"url": "example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, LinkError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CodeSettings, LinkService, StatsService};
    pub use crate::domain::entities::Mapping;
    pub use crate::domain::repositories::MappingRepository;
    pub use crate::error::{AppError, LinkError, StoreError};
    pub use crate::infrastructure::persistence::InMemoryMappingRepository;
    pub use crate::state::AppState;
}
