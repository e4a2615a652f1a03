//! Shelf - a fixed row of slots.

use std::ops::{Index, IndexMut};

use crate::common::config::SLOTS_PER_SHELF;
use crate::common::{Error, Result};
use crate::storage::Slot;

/// A shelf of exactly [`SLOTS_PER_SHELF`] slots.
///
/// # Indexing
/// `shelf[i]` panics when `i >= SLOTS_PER_SHELF`, like slice indexing.
/// Use [`Shelf::slot`] / [`Shelf::slot_mut`] to get an error instead.
#[derive(Debug, Default)]
pub struct Shelf {
    slots: [Slot; SLOTS_PER_SHELF],
}

impl Shelf {
    /// Create a shelf with every slot empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots (always [`SLOTS_PER_SHELF`]).
    #[inline]
    pub fn capacity(&self) -> usize {
        SLOTS_PER_SHELF
    }

    /// Borrow a slot.
    ///
    /// # Errors
    /// - `Error::SlotOutOfRange` if `index >= SLOTS_PER_SHELF`
    pub fn slot(&self, index: usize) -> Result<&Slot> {
        self.slots.get(index).ok_or(Error::SlotOutOfRange {
            index,
            capacity: SLOTS_PER_SHELF,
        })
    }

    /// Mutably borrow a slot.
    ///
    /// # Errors
    /// - `Error::SlotOutOfRange` if `index >= SLOTS_PER_SHELF`
    pub fn slot_mut(&mut self, index: usize) -> Result<&mut Slot> {
        self.slots.get_mut(index).ok_or(Error::SlotOutOfRange {
            index,
            capacity: SLOTS_PER_SHELF,
        })
    }

    /// Iterate over `(index, slot)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Slot)> {
        self.slots.iter().enumerate()
    }

    /// Number of slots holding an item.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    /// Mutable access to two distinct slots at once.
    ///
    /// Both indices must be in range and `a != b`.
    pub(crate) fn pair_mut(&mut self, a: usize, b: usize) -> (&mut Slot, &mut Slot) {
        debug_assert!(a != b);
        if a < b {
            let (left, right) = self.slots.split_at_mut(b);
            (&mut left[a], &mut right[0])
        } else {
            let (left, right) = self.slots.split_at_mut(a);
            (&mut right[0], &mut left[b])
        }
    }
}

impl Index<usize> for Shelf {
    type Output = Slot;

    fn index(&self, index: usize) -> &Slot {
        match self.slot(index) {
            Ok(slot) => slot,
            Err(e) => panic!("{}", e),
        }
    }
}

impl IndexMut<usize> for Shelf {
    fn index_mut(&mut self, index: usize) -> &mut Slot {
        match self.slot_mut(index) {
            Ok(slot) => slot,
            Err(e) => panic!("{}", e),
        }
    }
}
