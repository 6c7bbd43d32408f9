//! Infrastructure layer: repository implementations, config, service wiring.

pub mod config;
pub mod repository;
pub mod services;

pub use config::{CatalogConfig, ConfigError};
pub use repository::{InMemoryCategoryRepository, InMemoryProductRepository, InMemoryStore};
pub use services::{CatalogServices, bootstrap};
