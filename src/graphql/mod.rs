//! GraphQL schema, resolvers and HTTP transport for roomql.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! roomql serve --port 4000
//!
//! # Execute a query from CLI
//! roomql query '{ getPostAllRooms { id length width height } }'
//!
//! # Execute a mutation from CLI
//! roomql mutate 'createPostRoom(id: 1, length: 4, width: 3, height: 2.5) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `getPostRoom`, `getPostAllRooms`, `getPostFurniture`, `getPostAllFurniture`
//! - **Mutations**: `createPostRoom`, `updatePostRoom`, `deletePostRoom`,
//!   `createPostFurniture`, `updatePostFurniture`, `deletePostFurniture`
//!
//! Domain errors come back in `errors[]` with an HTTP 200 and a `code`
//! extension (`VALIDATION_ERROR`, `NOT_FOUND`, `STORAGE_ERROR`). Documents
//! that fail parsing or argument coercion come back with an HTTP 400.

mod schema;
mod server;
mod types;

pub use schema::{MutationRoot, QueryRoot, RoomqlSchema, build_schema, build_schema_for};
pub use server::{GRAPHQL_PATH, rejected_before_execution, router, run_server};
pub use types::*;
