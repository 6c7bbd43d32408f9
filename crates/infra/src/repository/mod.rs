//! Repository implementations for the catalog contracts.

pub mod catalog;
pub mod in_memory;

pub use catalog::{InMemoryCategoryRepository, InMemoryProductRepository};
pub use in_memory::InMemoryStore;
