use super::types::{Dimensions, Entity, EntityKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Furniture {
    pub id: String,

    #[serde(default)]
    pub position_x: f64,

    #[serde(default)]
    pub position_y: f64,

    #[serde(default)]
    pub position_z: f64,

    pub length: f64,
    pub width: f64,
    pub height: f64,

    #[serde(rename = "roomId")]
    pub room_id: String,
}

impl Furniture {
    /// Creates furniture at the origin of its room.
    pub fn new(
        id: impl Into<String>,
        dimensions: Dimensions,
        room_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            position_x: 0.0,
            position_y: 0.0,
            position_z: 0.0,
            length: dimensions.length,
            width: dimensions.width,
            height: dimensions.height,
            room_id: room_id.into(),
        }
    }

    pub fn with_position(mut self, x: f64, y: f64, z: f64) -> Self {
        self.position_x = x;
        self.position_y = y;
        self.position_z = z;
        self
    }
}

impl Entity for Furniture {
    const KIND: EntityKind = EntityKind::Furniture;

    fn id(&self) -> &str {
        &self.id
    }

    fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.length, self.width, self.height)
    }
}
