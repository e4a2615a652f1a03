//! Common types and utilities shared across the inventory.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - Identifiers (ItemId, Location)

pub mod config;
pub mod error;
mod item_id;
mod location;

pub use error::{Error, Result};
pub use item_id::ItemId;
pub use location::Location;
