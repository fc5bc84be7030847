//! # roomql - A GraphQL API for rooms and furniture
//!
//! roomql exposes create, read, update and delete operations for rooms and
//! the furniture placed in them. Every write checks the entity's dimensions
//! against bounds chosen by entity kind and operation before it reaches
//! storage.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server with the placeholder store
//! roomql serve
//!
//! # Keep created entities in memory instead
//! roomql --store memory serve --port 4000
//!
//! # Run a query without a server
//! roomql query '{ getPostRoom(id: 1) { id length width height } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (Room, Furniture)
//! - [`service`]: Validation and resolution shared by both entity kinds
//! - [`storage`]: Accessor trait and bundled implementations
//! - [`validation`]: Dimension bounds

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.roomql.yml` configuration files and discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `RoomqlError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and its axum transport.
pub mod graphql;

/// Logging setup.
///
/// Installs the tracing subscriber: stderr output plus optional JSON files.
pub mod logging;

/// Data models for rooms and furniture.
pub mod model;

/// Entity services.
///
/// Validation, accessor calls and not-found mapping shared by rooms and furniture.
pub mod service;

/// Storage accessors.
///
/// The CRUD capability resolvers depend on, with a placeholder and an
/// in-memory implementation.
pub mod storage;

/// Dimension bounds checked before every create and update.
pub mod validation;
