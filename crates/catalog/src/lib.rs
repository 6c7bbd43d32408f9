//! Catalog domain module.
//!
//! This crate contains the catalog entities and their business rules, plus the
//! repository contracts storage adapters implement (no IO, no HTTP, no storage).

pub mod category;
pub mod product;
pub mod repository;
pub mod rules;

pub use category::Category;
pub use product::{Product, ProductInput};
pub use repository::{
    CategoryRepository, ProductRepository, ProductWithCategory, RepositoryError, RepositoryResult,
};
