//! Core domain entities.
//!
//! - [`Mapping`] - A short code bound to an original URL, with a click counter

pub mod mapping;

pub use mapping::Mapping;
