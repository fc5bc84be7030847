//! Dimension bounds for rooms and furniture.
//!
//! Every create and update checks length, width and height against an open
//! interval `(min, max)` chosen by entity kind and operation. Both ends are
//! excluded. The lower bound is checked before the upper bound, so a call
//! with one dimension too small and another too large reports the lower one.

use crate::error::{Result, RoomqlError};
use crate::model::{Dimensions, EntityKind, Operation};

/// Open interval a dimension must fall strictly inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value > self.min && value < self.max
    }
}

pub const ROOM_CREATE_BOUNDS: Bounds = Bounds::new(0.0, 100.0);
pub const ROOM_UPDATE_BOUNDS: Bounds = Bounds::new(0.0, 100.0);
pub const FURNITURE_CREATE_BOUNDS: Bounds = Bounds::new(0.0, 5.0);
pub const FURNITURE_UPDATE_BOUNDS: Bounds = Bounds::new(0.0, 100.0);

/// Looks up the bounds for an entity kind and operation.
pub fn bounds_for(kind: EntityKind, op: Operation) -> Bounds {
    match (kind, op) {
        (EntityKind::Room, Operation::Create) => ROOM_CREATE_BOUNDS,
        (EntityKind::Room, Operation::Update) => ROOM_UPDATE_BOUNDS,
        (EntityKind::Furniture, Operation::Create) => FURNITURE_CREATE_BOUNDS,
        (EntityKind::Furniture, Operation::Update) => FURNITURE_UPDATE_BOUNDS,
    }
}

fn too_small_message(kind: EntityKind, op: Operation, min: f64) -> String {
    match (kind, op) {
        (EntityKind::Room, Operation::Create) => {
            format!("Dimensions have to be greater than {}", min)
        }
        (EntityKind::Furniture, Operation::Create) => {
            format!("Dimensions for the furniture have to be greater than {}", min)
        }
        (_, Operation::Update) => {
            format!("Dimensions used in the updated have to be greater than {}", min)
        }
    }
}

fn too_large_message(kind: EntityKind, op: Operation, max: f64) -> String {
    match (kind, op) {
        (EntityKind::Room, Operation::Create) => {
            format!("Dimensions have to be less than {}", max)
        }
        (EntityKind::Furniture, Operation::Create) => {
            format!("Dimensions for the furniture have to be less than {}", max)
        }
        (EntityKind::Room, Operation::Update) => {
            format!("Update dimensions for room have to be less than {}", max)
        }
        (EntityKind::Furniture, Operation::Update) => {
            format!("Update dimensions for furniture have to be less than {}", max)
        }
    }
}

/// Validates length, width and height for the given kind and operation.
pub fn validate_dimensions(kind: EntityKind, op: Operation, dims: &Dimensions) -> Result<()> {
    let bounds = bounds_for(kind, op);
    let values = dims.values();

    // NaN never compares greater than min, so it fails here
    if values.iter().any(|v| v.is_nan() || *v <= bounds.min) {
        return Err(RoomqlError::Validation(too_small_message(
            kind, op, bounds.min,
        )));
    }
    if values.iter().any(|v| *v >= bounds.max) {
        return Err(RoomqlError::Validation(too_large_message(
            kind, op, bounds.max,
        )));
    }
    Ok(())
}
