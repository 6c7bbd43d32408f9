//! Repository contracts for catalog entities.
//!
//! These traits only fix signatures and intent. Ordering, isolation and
//! durability are defined by each implementation.

use async_trait::async_trait;
use thiserror::Error;

use storefront_core::{CategoryId, DomainError, ProductId};

use crate::category::Category;
use crate::product::Product;

/// Repository operation error.
///
/// These are storage-side failures; field validation failures surface as
/// `Domain`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("storage error: {0}")]
    Storage(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// A product together with the category it refers to, if that category exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductWithCategory {
    pub product: Product,
    pub category: Option<Category>,
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories.
    async fn get_all(&self) -> RepositoryResult<Vec<Category>>;

    /// The matching category, or `None`. A `None` id never matches.
    async fn get_by_id(&self, id: Option<CategoryId>) -> RepositoryResult<Option<Category>>;

    /// Store a new category and return the stored form (with its assigned id).
    async fn create(&self, category: Category) -> RepositoryResult<Category>;

    /// Replace an existing category and return the stored form.
    async fn update(&self, category: Category) -> RepositoryResult<Category>;

    /// Delete a category and return what was removed.
    async fn remove(&self, category: Category) -> RepositoryResult<Category>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products.
    async fn get_all(&self) -> RepositoryResult<Vec<Product>>;

    /// The matching product, or `None`. A `None` id never matches.
    async fn get_by_id(&self, id: Option<ProductId>) -> RepositoryResult<Option<Product>>;

    /// The matching product along with its category.
    async fn get_with_category(
        &self,
        id: Option<ProductId>,
    ) -> RepositoryResult<Option<ProductWithCategory>>;

    /// Store a new product and return the stored form (with its assigned id).
    async fn create(&self, product: Product) -> RepositoryResult<Product>;

    /// Replace an existing product and return the stored form.
    async fn update(&self, product: Product) -> RepositoryResult<Product>;

    /// Delete a product and return what was removed.
    async fn remove(&self, product: Product) -> RepositoryResult<Product>;
}
