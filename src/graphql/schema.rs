use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, ID, Object, Schema};

use crate::config::StoreBackend;
use crate::error::RoomqlError;
use crate::model::{self, Dimensions, EntityKind, Operation};
use crate::service::{FurnitureService, RoomService};
use crate::storage::{Accessor, FixtureStore, MemoryStore};
use crate::validation::validate_dimensions;

use super::types::*;

pub type RoomqlSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema around the given accessors.
pub fn build_schema(
    rooms: Arc<dyn Accessor<model::Room>>,
    furniture: Arc<dyn Accessor<model::Furniture>>,
) -> RoomqlSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(RoomService::new(rooms))
        .data(FurnitureService::new(furniture))
        .finish()
}

/// Builds the schema with one of the bundled accessors.
pub fn build_schema_for(backend: StoreBackend) -> RoomqlSchema {
    tracing::debug!(%backend, "building schema");
    match backend {
        StoreBackend::Fixture => {
            let store = Arc::new(FixtureStore::new());
            build_schema(store.clone(), store)
        }
        StoreBackend::Memory => build_schema(
            Arc::new(MemoryStore::<model::Room>::new()),
            Arc::new(MemoryStore::<model::Furniture>::new()),
        ),
    }
}

fn rooms<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a RoomService> {
    ctx.data::<RoomService>()
}

fn all_rooms(ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Room>>> {
    let all = rooms(ctx)?.get_all().map_err(|e| e.extend())?;
    Ok(all.map(|rs| rs.into_iter().map(Room::from).collect()))
}

fn furniture<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a FurnitureService> {
    ctx.data::<FurnitureService>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a single room by ID
    async fn get_post_room(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Room>> {
        let room = rooms(ctx)?.get(&id).map_err(|e| e.extend())?;
        Ok(Some(room.into()))
    }

    /// List every room
    async fn get_post_all_rooms(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Room>>> {
        all_rooms(ctx)
    }

    /// List every room
    #[graphql(deprecation = "Use `getPostAllRooms`")]
    async fn get_post_rooms(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Room>>> {
        all_rooms(ctx)
    }

    /// Get a single piece of furniture by ID
    async fn get_post_furniture(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<Furniture>> {
        let item = furniture(ctx)?.get(&id).map_err(|e| e.extend())?;
        Ok(Some(item.into()))
    }

    /// List every piece of furniture
    async fn get_post_all_furniture(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Furniture>>> {
        let all = furniture(ctx)?.get_all().map_err(|e| e.extend())?;
        Ok(all.map(|fs| fs.into_iter().map(Furniture::from).collect()))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a room
    async fn create_post_room(
        &self,
        ctx: &Context<'_>,
        id: i32,
        length: f64,
        width: f64,
        height: f64,
    ) -> async_graphql::Result<Option<Room>> {
        let room = model::Room::new(id.to_string(), length, width, height);
        let room = rooms(ctx)?.create(room).map_err(|e| e.extend())?;
        Ok(Some(room.into()))
    }

    /// Replace the dimensions of a room
    async fn update_post_room(
        &self,
        ctx: &Context<'_>,
        id: i32,
        length: f64,
        width: f64,
        height: f64,
    ) -> async_graphql::Result<Option<Room>> {
        let room = model::Room::new(id.to_string(), length, width, height);
        let room = rooms(ctx)?.update(room).map_err(|e| e.extend())?;
        Ok(Some(room.into()))
    }

    /// Delete a room
    async fn delete_post_room(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<Option<bool>> {
        let deleted = rooms(ctx)?.delete(&id.to_string()).map_err(|e| e.extend())?;
        Ok(Some(deleted))
    }

    /// Place a new piece of furniture in a room
    async fn create_post_furniture(
        &self,
        ctx: &Context<'_>,
        id: i32,
        #[graphql(name = "position_x", default)] position_x: f64,
        #[graphql(name = "position_y", default)] position_y: f64,
        #[graphql(name = "position_z", default)] position_z: f64,
        length: f64,
        width: f64,
        height: f64,
        room_id: ID,
    ) -> async_graphql::Result<Option<Furniture>> {
        let item = model::Furniture::new(
            id.to_string(),
            Dimensions::new(length, width, height),
            room_id.0,
        )
        .with_position(position_x, position_y, position_z);
        let item = furniture(ctx)?.create(item).map_err(|e| e.extend())?;
        Ok(Some(item.into()))
    }

    /// Move or resize a piece of furniture
    ///
    /// When `roomId` is omitted the furniture stays in its current room.
    async fn update_post_furniture(
        &self,
        ctx: &Context<'_>,
        id: i32,
        #[graphql(name = "position_x")] position_x: f64,
        #[graphql(name = "position_y")] position_y: f64,
        #[graphql(name = "position_z")] position_z: f64,
        length: f64,
        width: f64,
        height: f64,
        room_id: Option<ID>,
    ) -> async_graphql::Result<Option<Furniture>> {
        let service = furniture(ctx)?;
        let id = id.to_string();
        let dims = Dimensions::new(length, width, height);

        // Bounds are checked before the current room is looked up
        validate_dimensions(EntityKind::Furniture, Operation::Update, &dims)
            .map_err(|e| e.extend())?;

        let room_id = match room_id {
            Some(room_id) => room_id.0,
            None => service
                .find(&id)
                .map_err(|e| e.extend())?
                .map(|current| current.room_id)
                .ok_or_else(|| {
                    RoomqlError::Validation(format!(
                        "roomId is required when furniture {} is not stored yet",
                        id
                    ))
                    .extend()
                })?,
        };

        let item = model::Furniture::new(id, dims, room_id)
            .with_position(position_x, position_y, position_z);
        let item = service.update(item).map_err(|e| e.extend())?;
        Ok(Some(item.into()))
    }

    /// Delete a piece of furniture
    async fn delete_post_furniture(
        &self,
        ctx: &Context<'_>,
        id: i32,
    ) -> async_graphql::Result<Option<bool>> {
        let deleted = furniture(ctx)?
            .delete(&id.to_string())
            .map_err(|e| e.extend())?;
        Ok(Some(deleted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdl_uses_wire_names() {
        let sdl = build_schema_for(StoreBackend::Fixture).sdl();
        assert!(sdl.contains("getPostRoom(id: ID!): Room"));
        assert!(sdl.contains("getPostAllFurniture: [Furniture!]"));
        assert!(sdl.contains("position_x: Float!"));
        assert!(sdl.contains("roomId: ID!"));
        assert!(sdl.contains("deletePostRoom(id: Int!): Boolean"));
    }
}
