//! Item types.
//!
//! This module contains:
//! - [`Item`] - The record stored in a slot
//! - [`ItemKind`] - Book / Movie / Magazine specific fields

#[allow(clippy::module_inception)]
mod item;

pub use item::{Item, ItemKind};
