use super::types::{Dimensions, Entity, EntityKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Room {
    pub fn new(id: impl Into<String>, length: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            length,
            width,
            height,
        }
    }
}

impl Entity for Room {
    const KIND: EntityKind = EntityKind::Room;

    fn id(&self) -> &str {
        &self.id
    }

    fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.length, self.width, self.height)
    }
}
