mod mutate;
mod query;
mod schema;
mod serve;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::RoomqlConfig;
use crate::graphql::{RoomqlSchema, build_schema_for};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: RoomqlConfig,
}

impl CommandContext {
    pub fn new(config: RoomqlConfig) -> Self {
        Self { config }
    }

    pub fn schema(&self) -> RoomqlSchema {
        build_schema_for(self.config.store.backend)
    }
}
