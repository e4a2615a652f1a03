//! Error types for the library inventory.

use thiserror::Error;

use crate::common::Location;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in the library inventory.
///
/// Every storage mutator reports its rejection through one of these
/// variants and leaves the storage untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// Shelf index is past the last shelf.
    #[error("Shelf {index} does not exist (storage has {count} shelves)")]
    ShelfOutOfRange { index: usize, count: usize },

    /// Slot index is past the end of a shelf.
    #[error("Compartment index {index} out of range (shelf has {capacity} compartments)")]
    SlotOutOfRange { index: usize, capacity: usize },

    /// Target slot already holds an item.
    #[error("Compartment {0} is already occupied")]
    SlotOccupied(Location),

    /// Slot holds nothing to act on.
    #[error("Compartment {0} is empty")]
    SlotEmpty(Location),

    /// No checked-out record originates from this location.
    #[error("No checked-out item recorded for location {0}")]
    NotCheckedOut(Location),

    /// I/O error from writing a listing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the two index-out-of-range variants.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Error::ShelfOutOfRange { .. } | Error::SlotOutOfRange { .. }
        )
    }
}
