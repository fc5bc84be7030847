//! Resolution logic shared by rooms and furniture.
//!
//! [`EntityService`] validates dimensions before any write, forwards to the
//! injected [`Accessor`], and turns absent lookups into `NotFound` errors.
//! GraphQL resolvers are thin wrappers around it.

use std::sync::Arc;

use crate::error::{Result, RoomqlError};
use crate::model::{Entity, Furniture, Operation, Room};
use crate::storage::Accessor;
use crate::validation::validate_dimensions;

pub type RoomService = EntityService<Room>;
pub type FurnitureService = EntityService<Furniture>;

pub struct EntityService<E: Entity> {
    accessor: Arc<dyn Accessor<E>>,
}

impl<E: Entity> Clone for EntityService<E> {
    fn clone(&self) -> Self {
        Self {
            accessor: Arc::clone(&self.accessor),
        }
    }
}

impl<E: Entity> EntityService<E> {
    pub fn new(accessor: Arc<dyn Accessor<E>>) -> Self {
        Self { accessor }
    }

    pub fn create(&self, entity: E) -> Result<E> {
        tracing::debug!(kind = %E::KIND, id = entity.id(), "create");
        validate_dimensions(E::KIND, Operation::Create, &entity.dimensions())?;
        self.accessor.create(entity)
    }

    pub fn get(&self, id: &str) -> Result<E> {
        tracing::debug!(kind = %E::KIND, id, "get");
        self.accessor.fetch_by_id(id)?.ok_or_else(|| {
            RoomqlError::NotFound(format!("{} with id: {} does not exist.", E::KIND, id))
        })
    }

    /// Looks up an entity without treating absence as an error.
    pub fn find(&self, id: &str) -> Result<Option<E>> {
        self.accessor.fetch_by_id(id)
    }

    /// Lists everything. An absent collection is passed through as `None`.
    pub fn get_all(&self) -> Result<Option<Vec<E>>> {
        tracing::debug!(kind = %E::KIND, "get all");
        self.accessor.fetch_all()
    }

    /// Validates and writes. Does not check that the entity exists first.
    pub fn update(&self, entity: E) -> Result<E> {
        tracing::debug!(kind = %E::KIND, id = entity.id(), "update");
        validate_dimensions(E::KIND, Operation::Update, &entity.dimensions())?;
        let id = entity.id().to_string();
        self.accessor.update(&id, entity)
    }

    pub fn delete(&self, id: &str) -> Result<bool> {
        tracing::debug!(kind = %E::KIND, id, "delete");
        if self.accessor.fetch_by_id(id)?.is_none() {
            return Err(RoomqlError::NotFound(format!("{} not found", E::KIND)));
        }
        self.accessor.delete(id)
    }
}
