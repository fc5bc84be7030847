//! Storage layer for rooms and furniture.
//!
//! Resolvers never touch storage directly; they go through an [`Accessor`]
//! handed to the schema at construction time. Any backing store that can
//! honour these five calls can be substituted without touching validation or
//! resolution.
//!
//! ## Components
//!
//! - [`Accessor`]: CRUD capability for one entity kind
//! - [`FixtureStore`]: Placeholder data, echoes writes back
//! - [`MemoryStore`]: In-process map, keeps state for the process lifetime

mod fixture;
mod memory;

pub use fixture::FixtureStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::model::Entity;

pub trait Accessor<E: Entity>: Send + Sync {
    /// Stores a new entity and returns what was stored.
    fn create(&self, entity: E) -> Result<E>;

    /// Looks up one entity. `Ok(None)` means it does not exist.
    fn fetch_by_id(&self, id: &str) -> Result<Option<E>>;

    /// Lists every entity. `Ok(None)` means the store has no collection to
    /// return, which is distinct from an empty one.
    fn fetch_all(&self) -> Result<Option<Vec<E>>>;

    /// Replaces the entity stored under `id`.
    fn update(&self, id: &str, entity: E) -> Result<E>;

    /// Removes the entity stored under `id`, reporting whether it did.
    fn delete(&self, id: &str) -> Result<bool>;
}
