use std::sync::Arc;

use async_trait::async_trait;

use storefront_catalog::{
    Category, CategoryRepository, Product, ProductRepository, ProductWithCategory,
    RepositoryResult,
};
use storefront_core::{CategoryId, Entity, ProductId};

use super::in_memory::InMemoryStore;

/// In-memory `CategoryRepository`.
#[derive(Debug, Default)]
pub struct InMemoryCategoryRepository {
    store: Arc<InMemoryStore<Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build on top of a store shared with other repositories.
    pub fn with_store(store: Arc<InMemoryStore<Category>>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> Arc<InMemoryStore<Category>> {
        self.store.clone()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn get_all(&self) -> RepositoryResult<Vec<Category>> {
        self.store.list()
    }

    async fn get_by_id(&self, id: Option<CategoryId>) -> RepositoryResult<Option<Category>> {
        self.store.get(id)
    }

    async fn create(&self, category: Category) -> RepositoryResult<Category> {
        let created = self.store.insert(category)?;
        tracing::info!(category_id = %created.id(), name = created.name(), "category created");
        Ok(created)
    }

    async fn update(&self, category: Category) -> RepositoryResult<Category> {
        self.store.replace(category)
    }

    async fn remove(&self, category: Category) -> RepositoryResult<Category> {
        let removed = self.store.delete(category.id())?;
        tracing::info!(category_id = %removed.id(), "category removed");
        Ok(removed)
    }
}

/// In-memory `ProductRepository`.
///
/// Reads categories from a store it shares with the category repository.
#[derive(Debug)]
pub struct InMemoryProductRepository {
    products: InMemoryStore<Product>,
    categories: Arc<InMemoryStore<Category>>,
}

impl InMemoryProductRepository {
    pub fn new(categories: Arc<InMemoryStore<Category>>) -> Self {
        Self {
            products: InMemoryStore::new(),
            categories,
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> RepositoryResult<Vec<Product>> {
        self.products.list()
    }

    async fn get_by_id(&self, id: Option<ProductId>) -> RepositoryResult<Option<Product>> {
        self.products.get(id)
    }

    async fn get_with_category(
        &self,
        id: Option<ProductId>,
    ) -> RepositoryResult<Option<ProductWithCategory>> {
        let Some(product) = self.products.get(id)? else {
            return Ok(None);
        };
        let category = self.categories.get(Some(product.category_id()))?;
        Ok(Some(ProductWithCategory { product, category }))
    }

    async fn create(&self, product: Product) -> RepositoryResult<Product> {
        let created = self.products.insert(product)?;
        tracing::info!(
            product_id = %created.id(),
            category_id = %created.category_id(),
            "product created"
        );
        Ok(created)
    }

    async fn update(&self, product: Product) -> RepositoryResult<Product> {
        self.products.replace(product)
    }

    async fn remove(&self, product: Product) -> RepositoryResult<Product> {
        let removed = self.products.delete(product.id())?;
        tracing::info!(product_id = %removed.id(), "product removed");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use storefront_catalog::RepositoryError;

    fn repos() -> (InMemoryCategoryRepository, InMemoryProductRepository) {
        let categories = InMemoryCategoryRepository::new();
        let products = InMemoryProductRepository::new(categories.store());
        (categories, products)
    }

    fn product(name: &str, category: i32) -> Product {
        Product::with_category(0, name, "Product Description", Decimal::new(999, 2), 10, None, category)
            .unwrap()
    }

    #[tokio::test]
    async fn create_assigns_ids_and_get_all_lists_them() {
        let (_, products) = repos();

        let first = products.create(product("Pencil", 1)).await.unwrap();
        let second = products.create(product("Eraser", 1)).await.unwrap();

        assert_eq!(first.id(), ProductId::new(1));
        assert_eq!(second.id(), ProductId::new(2));

        let all = products.get_all().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn get_by_id_handles_missing_and_absent_ids() {
        let (_, products) = repos();
        let created = products.create(product("Pencil", 1)).await.unwrap();

        assert_eq!(products.get_by_id(Some(created.id())).await.unwrap(), Some(created));
        assert_eq!(products.get_by_id(Some(ProductId::new(99))).await.unwrap(), None);
        assert_eq!(products.get_by_id(None).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_persists_validated_changes() {
        let (_, products) = repos();
        let mut stored = products.create(product("Pencil", 1)).await.unwrap();

        stored
            .update("Blue Pencil", "A blue pencil", Decimal::new(150, 2), 3, Some("blue.jpg"), 2)
            .unwrap();
        let updated = products.update(stored.clone()).await.unwrap();
        assert_eq!(updated, stored);

        let reloaded = products.get_by_id(Some(stored.id())).await.unwrap().unwrap();
        assert_eq!(reloaded.name(), "Blue Pencil");
        assert_eq!(reloaded.image(), Some("blue.jpg"));
    }

    #[tokio::test]
    async fn update_of_unknown_product_is_not_found() {
        let (_, products) = repos();
        let ghost = Product::new(42, "Ghost", "Never stored", Decimal::ONE, 1, None).unwrap();

        let err = products.update(ghost).await.unwrap_err();
        assert_eq!(err, RepositoryError::NotFound { entity: "product", id: 42 });
        assert!(products.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn remove_returns_stored_form() {
        let (_, products) = repos();
        let stored = products.create(product("Pencil", 1)).await.unwrap();

        let removed = products.remove(stored.clone()).await.unwrap();
        assert_eq!(removed, stored);
        assert_eq!(products.get_by_id(Some(stored.id())).await.unwrap(), None);

        let err = products.remove(stored).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn get_with_category_joins_existing_category() {
        let (categories, products) = repos();
        let category = categories.create(Category::draft("Stationery").unwrap()).await.unwrap();
        let stored = products.create(product("Pencil", category.id().into())).await.unwrap();
        let orphan = products.create(product("Marker", 77)).await.unwrap();

        let joined = products.get_with_category(Some(stored.id())).await.unwrap().unwrap();
        assert_eq!(joined.product, stored);
        assert_eq!(joined.category, Some(category));

        let joined = products.get_with_category(Some(orphan.id())).await.unwrap().unwrap();
        assert_eq!(joined.category, None);

        assert_eq!(products.get_with_category(None).await.unwrap(), None);
    }

    #[tokio::test]
    async fn category_crud_round() {
        let categories = InMemoryCategoryRepository::new();

        let mut books = categories.create(Category::draft("Books").unwrap()).await.unwrap();
        books.update("Novels").unwrap();
        categories.update(books.clone()).await.unwrap();

        let all = categories.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name(), "Novels");

        categories.remove(books).await.unwrap();
        assert!(categories.get_all().await.unwrap().is_empty());
    }
}
