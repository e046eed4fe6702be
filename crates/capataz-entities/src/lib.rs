//! capataz-entities: entity modeling layer for Foreman/Katello-style servers
//!
//! This crate drives integration tests against a remote management server.
//! It provides:
//! - Field descriptors that generate valid random test data per field type
//! - A declarative catalog of server resource types (paths, fields, renames,
//!   server modes)
//! - A fixture factory that resolves entity dependency graphs lazily and
//!   serializes foreign-key payloads
//! - An asynchronous task-polling protocol for long-running server operations
//! - A typed facade client wrapping the content workflow action endpoints
//!   (publish, promote, sync, manifest handling, repository enablement)

pub mod catalog;
pub mod client;
pub mod config;
pub mod constants;
pub mod descriptor;
pub mod error;
pub mod factory;
pub mod fields;
pub mod model;
pub mod search;
pub mod task;

pub use client::SatelliteClient;
pub use config::SatelliteConfig;
pub use descriptor::{EntityDescriptor, PathScope, ServerMode};
pub use error::EntityError;
pub use factory::EntityFactory;
pub use fields::{FieldDef, FieldKind, StrKind, StrSpec};
pub use task::PollSettings;
