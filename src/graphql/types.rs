use crate::error::RoomqlError;
use crate::model::{Furniture as ModelFurniture, Room as ModelRoom};
use crate::service::RoomService;
use async_graphql::{ComplexObject, Context, ErrorExtensions, ID, SimpleObject};

#[derive(SimpleObject, Clone, Debug)]
pub struct Room {
    pub id: ID,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl From<ModelRoom> for Room {
    fn from(r: ModelRoom) -> Self {
        Self {
            id: ID(r.id),
            length: r.length,
            width: r.width,
            height: r.height,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Furniture {
    pub id: ID,
    #[graphql(name = "position_x")]
    pub position_x: f64,
    #[graphql(name = "position_y")]
    pub position_y: f64,
    #[graphql(name = "position_z")]
    pub position_z: f64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub room_id: ID,
}

impl From<ModelFurniture> for Furniture {
    fn from(f: ModelFurniture) -> Self {
        Self {
            id: ID(f.id),
            position_x: f.position_x,
            position_y: f.position_y,
            position_z: f.position_z,
            length: f.length,
            width: f.width,
            height: f.height,
            room_id: ID(f.room_id),
        }
    }
}

#[ComplexObject]
impl Furniture {
    /// The room this furniture is placed in, if it exists
    async fn room(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Room>> {
        let rooms = ctx.data::<RoomService>()?;
        match rooms.get(&self.room_id) {
            Ok(room) => Ok(Some(room.into())),
            Err(RoomqlError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.extend()),
        }
    }
}
