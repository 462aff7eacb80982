//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod catalog_source;
pub mod mutation_source;

pub use catalog_source::CatalogSource;
pub use mutation_source::MutationSource;
