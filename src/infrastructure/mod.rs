//! Infrastructure layer
//!
//! Concrete implementations of the domain ports.

pub mod catalog;

pub use catalog::{bounded_reads, Deadline, FileCatalog, MemoryCatalog};
