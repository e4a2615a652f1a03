//! Storage layer - shelves, slots and checkout tracking.
//!
//! # Components
//! - [`LibraryStorage`] - The shelf grid and all item operations
//! - [`Shelf`] - A fixed row of slots
//! - [`Slot`] - One place holding at most one item
//! - [`CheckedOutRecord`] - An item out on loan and where it came from
//! - [`SharedStorage`] - A lock-guarded handle for multi-threaded callers

mod checkout;
mod library_storage;
mod shared;
mod shelf;
mod slot;

pub use checkout::CheckedOutRecord;
pub use library_storage::LibraryStorage;
pub use shared::SharedStorage;
pub use shelf::Shelf;
pub use slot::Slot;
