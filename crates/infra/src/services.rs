//! Composition root: wires repository implementations behind the catalog
//! contracts.

use std::sync::Arc;

use anyhow::Context;
use rust_decimal::Decimal;

use storefront_catalog::{
    Category, CategoryRepository, Product, ProductRepository, RepositoryResult,
};
use storefront_core::Entity;

use crate::config::CatalogConfig;
use crate::repository::{InMemoryCategoryRepository, InMemoryProductRepository, InMemoryStore};

/// Repositories handed to application code.
#[derive(Clone)]
pub struct CatalogServices {
    pub categories: Arc<dyn CategoryRepository>,
    pub products: Arc<dyn ProductRepository>,
}

impl core::fmt::Debug for CatalogServices {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CatalogServices").finish_non_exhaustive()
    }
}

impl CatalogServices {
    /// In-memory wiring (dev/test): both repositories share the category store.
    pub fn in_memory() -> Self {
        let category_store: Arc<InMemoryStore<Category>> = Arc::new(InMemoryStore::new());
        let categories = InMemoryCategoryRepository::with_store(category_store.clone());
        let products = InMemoryProductRepository::new(category_store);

        Self {
            categories: Arc::new(categories),
            products: Arc::new(products),
        }
    }

    pub async fn build(config: &CatalogConfig) -> RepositoryResult<Self> {
        let services = Self::in_memory();
        if config.seed_demo_data {
            seed_demo_data(services.categories.as_ref(), services.products.as_ref()).await?;
        }
        Ok(services)
    }
}

/// Load configuration from the environment, initialize tracing and build the
/// services.
pub async fn bootstrap() -> anyhow::Result<CatalogServices> {
    let config = CatalogConfig::from_env();
    storefront_observability::init_with_filter(&config.log_filter);

    let services = CatalogServices::build(&config)
        .await
        .context("failed to build catalog services")?;

    tracing::info!(seeded = config.seed_demo_data, "catalog services ready");
    Ok(services)
}

/// Seed rows go through the same constructors and contracts as any other
/// caller, so they are validated too.
async fn seed_demo_data(
    categories: &dyn CategoryRepository,
    products: &dyn ProductRepository,
) -> RepositoryResult<()> {
    let stationery = categories.create(Category::draft("Stationery")?).await?;
    let electronics = categories.create(Category::draft("Electronics")?).await?;
    let accessories = categories.create(Category::draft("Accessories")?).await?;

    let rows = [
        ("Spiral Notebook", "Spiral notebook, 100 sheets", Decimal::new(745, 2), 50, "notebook.jpg", stationery.id()),
        ("School Pencil Case", "Pencil case with zipper", Decimal::new(545, 2), 70, "pencil-case.jpg", stationery.id()),
        ("Eraser", "White soft eraser", Decimal::new(315, 2), 80, "eraser.jpg", stationery.id()),
        ("Calculator", "Simple pocket calculator", Decimal::new(1568, 2), 20, "calculator.jpg", electronics.id()),
        ("Headphones", "Wired stereo headphones", Decimal::new(2490, 2), 15, "headphones.jpg", accessories.id()),
    ];

    let count = rows.len();
    for (name, description, price, stock, image, category_id) in rows {
        let product = Product::with_category(0, name, description, price, stock, Some(image), category_id)?;
        products.create(product).await?;
    }

    tracing::info!(categories = 3, products = count, "demo data seeded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::CategoryId;

    #[tokio::test]
    async fn build_without_seed_is_empty() {
        let services = CatalogServices::build(&CatalogConfig::default()).await.unwrap();
        assert!(services.categories.get_all().await.unwrap().is_empty());
        assert!(services.products.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn build_with_seed_populates_both_repositories() {
        let config = CatalogConfig {
            seed_demo_data: true,
            ..CatalogConfig::default()
        };
        let services = CatalogServices::build(&config).await.unwrap();

        let categories = services.categories.get_all().await.unwrap();
        let names: Vec<&str> = categories.iter().map(Category::name).collect();
        assert_eq!(names, vec!["Stationery", "Electronics", "Accessories"]);

        let products = services.products.get_all().await.unwrap();
        assert_eq!(products.len(), 5);
        assert!(products.iter().all(|p| p.category_id() != CategoryId::new(0)));
    }

    #[tokio::test]
    async fn products_see_categories_created_through_services() {
        let services = CatalogServices::in_memory();
        let category = services
            .categories
            .create(Category::draft("Garden").unwrap())
            .await
            .unwrap();
        let product = Product::with_category(0, "Shovel", "Steel garden shovel", Decimal::new(1999, 2), 4, None, category.id())
            .unwrap();
        let product = services.products.create(product).await.unwrap();

        let joined = services
            .products
            .get_with_category(Some(product.id()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(joined.category.map(|c| c.name().to_string()), Some("Garden".to_string()));
    }
}
