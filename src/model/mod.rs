//! Data models for roomql.
//!
//! This module defines the core data structures:
//!
//! - [`Room`]: A room with three dimensions
//! - [`Furniture`]: A piece of furniture placed in a room
//! - [`Entity`]: The shared shape both kinds expose to validation and storage
//! - [`EntityKind`], [`Operation`]: Selectors for the dimension bounds table

mod furniture;
mod room;
mod types;

pub use furniture::Furniture;
pub use room::Room;
pub use types::{Dimensions, Entity, EntityKind, Operation};
