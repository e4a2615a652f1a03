//! Slot - one place on a shelf.
//!
//! A [`Slot`] holds at most one [`Item`]. It knows nothing about its own
//! coordinates; callers that report errors pass the [`Location`] in.

use crate::common::{Error, Location, Result};
use crate::item::Item;

/// A storage slot.
///
/// Slots are the cells of a shelf. Each slot owns zero or one item; the
/// storage moves items in and out by value.
#[derive(Debug, Default)]
pub struct Slot {
    /// The owned item, or None if the slot is empty.
    item: Option<Item>,
}

impl Slot {
    /// Create a new empty slot.
    pub fn new() -> Self {
        Self { item: None }
    }

    /// Check if the slot is empty (no item stored).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }

    /// Peek at the stored item.
    #[inline]
    pub fn get(&self) -> Option<&Item> {
        self.item.as_ref()
    }

    /// Store an item in this slot.
    ///
    /// # Errors
    /// - `Error::SlotOccupied` if the slot already holds an item. The
    ///   occupant stays and `item` is dropped.
    pub fn place(&mut self, item: Item, location: Location) -> Result<()> {
        if self.item.is_some() {
            return Err(Error::SlotOccupied(location));
        }
        self.item = Some(item);
        Ok(())
    }

    /// Move the item out, leaving the slot empty.
    ///
    /// Returns None if there was nothing to move.
    #[inline]
    pub fn remove(&mut self) -> Option<Item> {
        self.item.take()
    }

    /// Exchange contents with another slot.
    #[inline]
    pub(crate) fn swap_with(&mut self, other: &mut Slot) {
        std::mem::swap(&mut self.item, &mut other.item);
    }
}
