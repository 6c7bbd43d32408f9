use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use storefront_catalog::{RepositoryError, RepositoryResult};
use storefront_core::{Entity, IntegerId};

/// In-memory entity table keyed by id.
///
/// Intended for tests/dev. Rows are kept in ascending id order; ids are
/// allocated as `max + 1` for entities inserted with the unassigned id `0`.
#[derive(Debug)]
pub struct InMemoryStore<E: Entity> {
    rows: RwLock<BTreeMap<E::Id, E>>,
}

impl<E: Entity> InMemoryStore<E> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<E: Entity> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryStore<E>
where
    E: Entity + Clone,
{
    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, BTreeMap<E::Id, E>>> {
        self.rows
            .read()
            .map_err(|_| RepositoryError::Storage("lock poisoned".to_string()))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, BTreeMap<E::Id, E>>> {
        self.rows
            .write()
            .map_err(|_| RepositoryError::Storage("lock poisoned".to_string()))
    }

    fn not_found(id: E::Id) -> RepositoryError {
        RepositoryError::NotFound {
            entity: E::KIND,
            id: id.get(),
        }
    }

    pub fn list(&self) -> RepositoryResult<Vec<E>> {
        Ok(self.read()?.values().cloned().collect())
    }

    pub fn get(&self, id: Option<E::Id>) -> RepositoryResult<Option<E>> {
        let Some(id) = id else {
            return Ok(None);
        };
        Ok(self.read()?.get(&id).cloned())
    }

    pub fn len(&self) -> RepositoryResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> RepositoryResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Insert a new row, allocating an id when the entity has none.
    pub fn insert(&self, entity: E) -> RepositoryResult<E> {
        let mut rows = self.write()?;

        let entity = if entity.id().is_unassigned() {
            let next = match rows.keys().next_back() {
                Some(last) => last.get().checked_add(1).ok_or_else(|| {
                    RepositoryError::Storage(format!("{} id space exhausted", E::KIND))
                })?,
                None => 1,
            };
            entity.with_id(E::Id::from_raw(next))?
        } else {
            entity
        };

        let id = entity.id();
        if rows.contains_key(&id) {
            return Err(RepositoryError::Conflict(format!(
                "{} {} already exists",
                E::KIND,
                id.get()
            )));
        }

        rows.insert(id, entity.clone());
        tracing::debug!(entity = E::KIND, id = id.get(), "row inserted");
        Ok(entity)
    }

    /// Overwrite an existing row.
    pub fn replace(&self, entity: E) -> RepositoryResult<E> {
        let mut rows = self.write()?;
        let id = entity.id();
        let slot = rows.get_mut(&id).ok_or_else(|| Self::not_found(id))?;
        *slot = entity.clone();
        tracing::debug!(entity = E::KIND, id = id.get(), "row replaced");
        Ok(entity)
    }

    /// Delete a row by id and return the stored version.
    pub fn delete(&self, id: E::Id) -> RepositoryResult<E> {
        let mut rows = self.write()?;
        let removed = rows.remove(&id).ok_or_else(|| Self::not_found(id))?;
        tracing::debug!(entity = E::KIND, id = id.get(), "row deleted");
        Ok(removed)
    }
}
