//! # rtdb-core
//!
//! Core types, traits, and utilities for the realtime database client.
//!
//! This crate provides the building blocks used by the query layer:
//! - Error taxonomy and result alias
//! - The `ApiClient` transport seam
//! - References (locations in the database tree) and snapshots
//! - Configuration types

pub mod config;
pub mod error;
pub mod reference;
pub mod result;
pub mod snapshot;
pub mod traits;

pub use error::*;
pub use reference::Reference;
pub use result::*;
pub use snapshot::Snapshot;
pub use traits::*;
