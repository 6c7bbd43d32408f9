use serde::Serialize;

use storefront_core::{CategoryId, DomainResult, Entity, IntegerId};

use crate::rules;

/// Entity: Category.
///
/// Products refer to a category by id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    id: CategoryId,
    name: String,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: &str) -> DomainResult<Self> {
        let id = id.into();
        rules::id(id.get())?;
        let name = rules::name(Some(name))?;

        Ok(Self {
            id,
            name: name.to_owned(),
        })
    }

    /// Create a category that has not been stored yet (id `0`).
    pub fn draft(name: &str) -> DomainResult<Self> {
        Self::new(CategoryId::UNASSIGNED, name)
    }

    /// Rename the category; unchanged on error.
    pub fn update(&mut self, name: &str) -> DomainResult<()> {
        let name = rules::name(Some(name))?;
        self.name = name.to_owned();
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Category {
    type Id = CategoryId;

    const KIND: &'static str = "category";

    fn id(&self) -> Self::Id {
        self.id
    }

    fn with_id(self, id: Self::Id) -> DomainResult<Self> {
        rules::id(id.get())?;
        Ok(Self { id, ..self })
    }
}
