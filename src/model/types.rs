use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Room,
    Furniture,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Room => write!(f, "Room"),
            EntityKind::Furniture => write!(f, "Furniture"),
        }
    }
}

/// The mutating operations that carry dimension bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Update,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => write!(f, "create"),
            Operation::Update => write!(f, "update"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    pub fn values(&self) -> [f64; 3] {
        [self.length, self.width, self.height]
    }
}

/// Something stored behind an accessor and validated by its dimensions.
pub trait Entity: Clone + Send + Sync + 'static {
    const KIND: EntityKind;

    fn id(&self) -> &str;

    fn dimensions(&self) -> Dimensions;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display_is_capitalized() {
        assert_eq!(EntityKind::Room.to_string(), "Room");
        assert_eq!(EntityKind::Furniture.to_string(), "Furniture");
    }

    #[test]
    fn test_dimension_values_order() {
        let dims = Dimensions::new(1.0, 2.0, 3.0);
        assert_eq!(dims.values(), [1.0, 2.0, 3.0]);
    }
}
