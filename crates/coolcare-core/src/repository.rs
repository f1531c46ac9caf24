//! Generic repository port for back-office entities.

use crate::error::Result;
use async_trait::async_trait;

/// An entity that can be stored in a [`Repository`].
pub trait Entity: Clone + Send + Sync + 'static {
    /// Name used in error messages (e.g. `"package"`).
    const ENTITY_TYPE: &'static str;

    fn id(&self) -> &str;
}

/// Free-text search over an entity's listed columns.
pub trait Searchable {
    /// Whether `query` matches this entity. An empty query matches everything.
    fn matches(&self, query: &str) -> bool;
}

/// Case-insensitive substring match used by the admin search boxes.
pub fn contains_ignore_case(haystack: &str, query: &str) -> bool {
    haystack.to_lowercase().contains(&query.to_lowercase())
}

/// Row filter passed to [`Repository::filter`].
pub type Predicate<'a, T> = &'a (dyn Fn(&T) -> bool + Send + Sync);

/// An abstract store for one kind of back-office entity.
///
/// # Implementation Notes
///
/// - `list` preserves insertion order.
/// - `add` fails with `AlreadyExists` when the ID is taken.
/// - `update` and `remove` fail with `NotFound` for unknown IDs.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Lists all stored entities.
    async fn list(&self) -> Result<Vec<T>>;

    /// Finds an entity by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Entity found
    /// - `Ok(None)`: Entity not found
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_by_id(&self, id: &str) -> Result<Option<T>>;

    /// Lists the entities accepted by `predicate`.
    async fn filter(&self, predicate: Predicate<'_, T>) -> Result<Vec<T>> {
        let all = self.list().await?;
        Ok(all.into_iter().filter(|entity| predicate(entity)).collect())
    }

    /// Stores a new entity and returns it.
    async fn add(&self, entity: T) -> Result<T>;

    /// Replaces the stored entity with the same ID and returns it.
    async fn update(&self, entity: T) -> Result<T>;

    /// Deletes the entity with `id`.
    async fn remove(&self, id: &str) -> Result<()>;
}
