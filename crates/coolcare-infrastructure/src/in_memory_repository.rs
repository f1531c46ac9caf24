//! In-memory implementation of the generic entity repository.

use async_trait::async_trait;
use coolcare_core::error::{CoolcareError, Result};
use coolcare_core::repository::{Entity, Repository};
use std::sync::Arc;
use tokio::sync::RwLock;

/// A [`Repository`] keeping entities in insertion order in memory.
///
/// Cloning the repository shares the underlying storage.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T: Entity> {
    entities: Arc<RwLock<Vec<T>>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_entities(Vec::new())
    }

    /// Creates a repository pre-filled with `entities`, kept in the given order.
    pub fn with_entities(entities: Vec<T>) -> Self {
        Self {
            entities: Arc::new(RwLock::new(entities)),
        }
    }

    pub async fn len(&self) -> usize {
        self.entities.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entities.read().await.is_empty()
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn list(&self) -> Result<Vec<T>> {
        Ok(self.entities.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>> {
        let entities = self.entities.read().await;
        Ok(entities.iter().find(|entity| entity.id() == id).cloned())
    }

    async fn add(&self, entity: T) -> Result<T> {
        let mut entities = self.entities.write().await;
        if entities.iter().any(|existing| existing.id() == entity.id()) {
            return Err(CoolcareError::already_exists(T::ENTITY_TYPE, entity.id()));
        }
        tracing::debug!(target: "admin", "Added {} '{}'", T::ENTITY_TYPE, entity.id());
        entities.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: T) -> Result<T> {
        let mut entities = self.entities.write().await;
        let slot = entities
            .iter_mut()
            .find(|existing| existing.id() == entity.id())
            .ok_or_else(|| CoolcareError::not_found(T::ENTITY_TYPE, entity.id()))?;
        *slot = entity.clone();
        tracing::debug!(target: "admin", "Updated {} '{}'", T::ENTITY_TYPE, entity.id());
        Ok(entity)
    }

    async fn remove(&self, id: &str) -> Result<()> {
        let mut entities = self.entities.write().await;
        let index = entities
            .iter()
            .position(|entity| entity.id() == id)
            .ok_or_else(|| CoolcareError::not_found(T::ENTITY_TYPE, id))?;
        entities.remove(index);
        tracing::debug!(target: "admin", "Removed {} '{}'", T::ENTITY_TYPE, id);
        Ok(())
    }
}
