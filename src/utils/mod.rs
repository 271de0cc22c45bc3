//! Utility functions for code generation, URL processing, and request handling.
//!
//! - [`code_generator`] - Random short code generation with uniqueness probing
//! - [`url_validator`] - URL normalization and syntactic validation
//! - [`request_origin`] - Public origin resolution from HTTP headers

pub mod code_generator;
pub mod request_origin;
pub mod url_validator;
