//! Mapping store implementations.
//!
//! - [`InMemoryMappingRepository`] - Lock-guarded, process-local table

pub mod memory_mapping_repository;

pub use memory_mapping_repository::InMemoryMappingRepository;
