use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefront_core::{CategoryId, DomainError, DomainResult, Entity, IntegerId, ProductId};

use crate::rules;

/// Entity: Product.
///
/// Instances only exist in a valid state: every constructor and `update`
/// validates all fields before anything is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Decimal,
    stock: i32,
    image: Option<String>,
    category_id: CategoryId,
}

/// Validated mutable fields, assigned in one step.
struct ProductFields {
    name: String,
    description: String,
    price: Decimal,
    stock: i32,
    image: Option<String>,
}

impl ProductFields {
    fn validate(
        name: Option<&str>,
        description: Option<&str>,
        price: Decimal,
        stock: i32,
        image: Option<&str>,
    ) -> DomainResult<Self> {
        let name = rules::name(name)?;
        let description = rules::description(description)?;
        rules::price(price)?;
        rules::stock(stock)?;
        rules::image(image)?;

        Ok(Self {
            name: name.to_owned(),
            description: description.to_owned(),
            price,
            stock,
            image: image.map(str::to_owned),
        })
    }
}

impl Product {
    /// Create a product with an explicit id; `category_id` defaults to `0`.
    pub fn new(
        id: impl Into<ProductId>,
        name: &str,
        description: &str,
        price: Decimal,
        stock: i32,
        image: Option<&str>,
    ) -> DomainResult<Self> {
        Self::with_category(id, name, description, price, stock, image, CategoryId::UNASSIGNED)
    }

    /// Create a product with an explicit id and category.
    pub fn with_category(
        id: impl Into<ProductId>,
        name: &str,
        description: &str,
        price: Decimal,
        stock: i32,
        image: Option<&str>,
        category_id: impl Into<CategoryId>,
    ) -> DomainResult<Self> {
        Self::build(
            id.into(),
            Some(name),
            Some(description),
            price,
            stock,
            image,
            category_id.into(),
        )
    }

    /// Create a product that has not been stored yet (id `0`).
    pub fn draft(
        name: &str,
        description: &str,
        price: Decimal,
        stock: i32,
        image: Option<&str>,
    ) -> DomainResult<Self> {
        Self::new(ProductId::UNASSIGNED, name, description, price, stock, image)
    }

    fn build(
        id: ProductId,
        name: Option<&str>,
        description: Option<&str>,
        price: Decimal,
        stock: i32,
        image: Option<&str>,
        category_id: CategoryId,
    ) -> DomainResult<Self> {
        rules::id(id.get())?;
        let fields = ProductFields::validate(name, description, price, stock, image)?;

        Ok(Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            stock: fields.stock,
            image: fields.image,
            category_id,
        })
    }

    /// Replace all mutable fields.
    ///
    /// On error the product is left exactly as it was.
    pub fn update(
        &mut self,
        name: &str,
        description: &str,
        price: Decimal,
        stock: i32,
        image: Option<&str>,
        category_id: impl Into<CategoryId>,
    ) -> DomainResult<()> {
        let fields = ProductFields::validate(Some(name), Some(description), price, stock, image)?;

        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.stock = fields.stock;
        self.image = fields.image;
        self.category_id = category_id.into();
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn stock(&self) -> i32 {
        self.stock
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }
}

impl Entity for Product {
    type Id = ProductId;

    const KIND: &'static str = "product";

    fn id(&self) -> Self::Id {
        self.id
    }

    fn with_id(self, id: Self::Id) -> DomainResult<Self> {
        rules::id(id.get())?;
        Ok(Self { id, ..self })
    }
}

/// Unvalidated product data, e.g. as received from a client.
///
/// Missing text fields are treated as null: a missing name or description is
/// rejected the same way an empty one is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category_id: Option<i32>,
}

impl TryFrom<ProductInput> for Product {
    type Error = DomainError;

    fn try_from(input: ProductInput) -> Result<Self, Self::Error> {
        Product::build(
            ProductId::new(input.id.unwrap_or_default()),
            input.name.as_deref(),
            input.description.as_deref(),
            input.price,
            input.stock,
            input.image.as_deref(),
            CategoryId::new(input.category_id.unwrap_or_default()),
        )
    }
}
