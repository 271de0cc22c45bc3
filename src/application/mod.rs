//! Application layer services implementing business logic.
//!
//! Services orchestrate validation, code generation and store calls, and
//! expose the synchronous facade used by HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation, lookup and redirects
//! - [`services::stats_service::StatsService`] - Per-link click statistics

pub mod services;
