//! Library Storage - the shelf grid and checkout bookkeeping.
//!
//! The [`LibraryStorage`] provides:
//! - A fixed grid of shelves, each with
//!   [`SLOTS_PER_SHELF`](crate::common::config::SLOTS_PER_SHELF) slots
//! - Add / remove / swap of items between slots
//! - Checkout and checkin, with a side list of [`CheckedOutRecord`]s

use std::io::Write;
use std::ops::{Index, IndexMut};

use tracing::{debug, warn};

use crate::common::config::DEFAULT_SHELF_COUNT;
use crate::common::{Error, Location, Result};
use crate::item::Item;
use crate::storage::{CheckedOutRecord, Shelf, Slot};

/// The whole inventory: shelves plus checked-out items.
///
/// # Architecture
/// ```text
/// ┌───────────────────────────────────────────────────────────┐
/// │                     LibraryStorage                        │
/// │  shelves: Vec<Shelf>                                      │
/// │   Shelf 0  [Slot0] [Slot1] ... [Slot14]                   │
/// │   Shelf 1  [Slot0] [Slot1] ... [Slot14]                   │
/// │   ...                                                     │
/// │  checked_out: Vec<CheckedOutRecord>  (insertion order)    │
/// └───────────────────────────────────────────────────────────┘
/// ```
///
/// # Ownership
/// Every item in the system lives in exactly one place: a slot, or a
/// checked-out record. Checkout moves the item from its slot into a new
/// record; checkin moves it back and drops the record.
///
/// # Failure
/// Mutators check every precondition before touching anything. A rejected
/// call logs a warning, returns the error and leaves the storage as it was.
///
/// # Usage
/// ```
/// use library_inventory::{Item, LibraryStorage};
///
/// let mut lib = LibraryStorage::new(3);
/// lib.add_item(Item::book("Guide", "desc", 1, "Guide", "Someone", "2013"), 2, 4)?;
///
/// lib.checkout_item(2, 4, "Alice", "2025-12-01")?;
/// assert!(lib[2][4].is_empty());
///
/// lib.checkin_item(2, 4)?;
/// assert_eq!(lib[2][4].get().unwrap().name(), "Guide");
/// # Ok::<(), library_inventory::Error>(())
/// ```
#[derive(Debug)]
pub struct LibraryStorage {
    /// Fixed set of shelves allocated at construction.
    shelves: Vec<Shelf>,

    /// Items currently out, oldest first.
    checked_out: Vec<CheckedOutRecord>,
}

impl LibraryStorage {
    /// Create a storage with `num_shelves` empty shelves.
    ///
    /// # Panics
    /// Panics if `num_shelves` is 0.
    pub fn new(num_shelves: usize) -> Self {
        assert!(num_shelves > 0, "num_shelves must be > 0");

        Self {
            shelves: (0..num_shelves).map(|_| Shelf::new()).collect(),
            checked_out: Vec::new(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn num_shelves(&self) -> usize {
        self.shelves.len()
    }

    #[inline]
    pub fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }

    /// Checked-out records in the order they were created.
    #[inline]
    pub fn checked_out(&self) -> &[CheckedOutRecord] {
        &self.checked_out
    }

    /// Number of items sitting in slots (checked-out items not counted).
    pub fn item_count(&self) -> usize {
        self.shelves.iter().map(Shelf::occupied).sum()
    }

    /// First checked-out record whose origin is `location`.
    pub fn find_checkout(&self, location: Location) -> Option<&CheckedOutRecord> {
        self.checked_out.iter().find(|r| r.origin == location)
    }

    /// Borrow a shelf.
    ///
    /// # Errors
    /// - `Error::ShelfOutOfRange` if `index >= num_shelves()`
    pub fn shelf(&self, index: usize) -> Result<&Shelf> {
        self.shelves.get(index).ok_or(Error::ShelfOutOfRange {
            index,
            count: self.shelves.len(),
        })
    }

    /// Borrow the slot at `(shelf, slot)`.
    ///
    /// # Errors
    /// - `Error::ShelfOutOfRange` / `Error::SlotOutOfRange` on bad indices
    pub fn slot_at(&self, shelf: usize, slot: usize) -> Result<&Slot> {
        self.shelf(shelf)?.slot(slot)
    }

    // ========================================================================
    // Mutators
    // ========================================================================

    /// Put `item` into the empty slot at `(shelf, slot)`.
    ///
    /// # Errors
    /// - `Error::ShelfOutOfRange` / `Error::SlotOutOfRange` on bad indices
    /// - `Error::SlotOccupied` if the slot already holds an item
    ///
    /// On error the storage is unchanged and `item` is dropped.
    pub fn add_item(&mut self, item: Item, shelf: usize, slot: usize) -> Result<()> {
        let location = Location::new(shelf, slot);
        let id = item.id();

        locate_mut(&mut self.shelves, location)
            .and_then(|target| target.place(item, location))
            .inspect(|_| debug!(shelf, slot, item = id.0, "item added"))
            .inspect_err(|e| log_rejection("add", e))
    }

    /// Take the item at `(shelf, slot)` out of storage for good.
    ///
    /// The item is handed back; dropping it ends its life in the system.
    ///
    /// # Errors
    /// - `Error::ShelfOutOfRange` / `Error::SlotOutOfRange` on bad indices
    /// - `Error::SlotEmpty` if there is nothing to remove
    pub fn remove_item(&mut self, shelf: usize, slot: usize) -> Result<Item> {
        let location = Location::new(shelf, slot);

        locate_mut(&mut self.shelves, location)
            .and_then(|target| target.remove().ok_or(Error::SlotEmpty(location)))
            .inspect(|item| debug!(shelf, slot, item = item.id().0, "item removed"))
            .inspect_err(|e| log_rejection("remove", e))
    }

    /// Lend out the item at `(shelf, slot)`.
    ///
    /// The item leaves its slot and is held in a new [`CheckedOutRecord`]
    /// appended to the checked-out list.
    ///
    /// # Errors
    /// - `Error::ShelfOutOfRange` / `Error::SlotOutOfRange` on bad indices
    /// - `Error::SlotEmpty` if the slot holds nothing
    pub fn checkout_item(
        &mut self,
        shelf: usize,
        slot: usize,
        person: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Result<()> {
        let origin = Location::new(shelf, slot);

        let item = locate_mut(&mut self.shelves, origin)
            .and_then(|source| source.remove().ok_or(Error::SlotEmpty(origin)))
            .inspect_err(|e| log_rejection("checkout", e))?;

        let record = CheckedOutRecord {
            item,
            origin,
            person: person.into(),
            due_date: due_date.into(),
        };
        debug!(
            shelf,
            slot,
            item = record.item.id().0,
            person = %record.person,
            due = %record.due_date,
            "item checked out"
        );
        self.checked_out.push(record);
        Ok(())
    }

    /// Return a checked-out item to the slot it came from.
    ///
    /// Matches the first record (oldest first) whose origin is
    /// `(shelf, slot)`.
    ///
    /// # Errors
    /// - `Error::NotCheckedOut` if no record originates there
    /// - `Error::SlotOccupied` if the origin slot was refilled meanwhile; the
    ///   record stays on the list
    pub fn checkin_item(&mut self, shelf: usize, slot: usize) -> Result<()> {
        self.checkin_at(Location::new(shelf, slot))
            .inspect_err(|e| log_rejection("checkin", e))
    }

    fn checkin_at(&mut self, location: Location) -> Result<()> {
        let pos = self
            .checked_out
            .iter()
            .position(|r| r.origin == location)
            .ok_or(Error::NotCheckedOut(location))?;

        let target = locate_mut(&mut self.shelves, location)?;
        if !target.is_empty() {
            return Err(Error::SlotOccupied(location));
        }

        let record = self.checked_out.remove(pos);
        debug!(
            shelf = location.shelf,
            slot = location.slot,
            item = record.item.id().0,
            person = %record.person,
            "item checked in"
        );
        target.place(record.item, location)
    }

    /// Exchange the items at `(s1, c1)` and `(s2, c2)`.
    ///
    /// Both slots must hold an item. Swapping a slot with itself succeeds
    /// and changes nothing.
    ///
    /// # Errors
    /// - `Error::ShelfOutOfRange` / `Error::SlotOutOfRange` on bad indices
    /// - `Error::SlotEmpty` naming the first empty slot
    pub fn swap_items(&mut self, s1: usize, c1: usize, s2: usize, c2: usize) -> Result<()> {
        let a = Location::new(s1, c1);
        let b = Location::new(s2, c2);
        self.swap_at(a, b)
            .inspect(|_| debug!(from = %a, to = %b, "items swapped"))
            .inspect_err(|e| log_rejection("swap", e))
    }

    fn swap_at(&mut self, a: Location, b: Location) -> Result<()> {
        // Shelves first, then slots, then occupancy.
        self.shelf(a.shelf)?;
        self.shelf(b.shelf)?;
        let first_empty = self.slot_at(a.shelf, a.slot)?.is_empty();
        let second_empty = self.slot_at(b.shelf, b.slot)?.is_empty();
        if first_empty {
            return Err(Error::SlotEmpty(a));
        }
        if second_empty {
            return Err(Error::SlotEmpty(b));
        }

        if a == b {
            return Ok(());
        }

        let (first, second) = if a.shelf == b.shelf {
            self.shelves[a.shelf].pair_mut(a.slot, b.slot)
        } else if a.shelf < b.shelf {
            let (left, right) = self.shelves.split_at_mut(b.shelf);
            (&mut left[a.shelf][a.slot], &mut right[0][b.slot])
        } else {
            let (left, right) = self.shelves.split_at_mut(a.shelf);
            (&mut right[0][a.slot], &mut left[b.shelf][b.slot])
        };
        first.swap_with(second);
        Ok(())
    }

    // ========================================================================
    // Listings
    // ========================================================================

    /// Write every occupied slot, shelf-major.
    pub fn print_items_in_storage<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Items in storage:")?;
        for (s, shelf) in self.shelves.iter().enumerate() {
            for (c, slot) in shelf.iter() {
                if let Some(item) = slot.get() {
                    writeln!(out, " Shelf {} Compartment {} -> {}", s, c, item)?;
                }
            }
        }
        Ok(())
    }

    /// Write the checked-out list, oldest first.
    pub fn print_checked_out_items<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Checked-out items:")?;
        if self.checked_out.is_empty() {
            writeln!(out, " (none)")?;
        }
        for record in &self.checked_out {
            writeln!(out, " {}", record)?;
        }
        Ok(())
    }
}

impl Default for LibraryStorage {
    fn default() -> Self {
        Self::new(DEFAULT_SHELF_COUNT)
    }
}

impl Index<usize> for LibraryStorage {
    type Output = Shelf;

    fn index(&self, index: usize) -> &Shelf {
        match self.shelf(index) {
            Ok(shelf) => shelf,
            Err(e) => panic!("{}", e),
        }
    }
}

impl IndexMut<usize> for LibraryStorage {
    fn index_mut(&mut self, index: usize) -> &mut Shelf {
        let count = self.shelves.len();
        match self.shelves.get_mut(index) {
            Some(shelf) => shelf,
            None => panic!("{}", Error::ShelfOutOfRange { index, count }),
        }
    }
}

/// Resolve a location against a shelf list.
fn locate_mut(shelves: &mut [Shelf], location: Location) -> Result<&mut Slot> {
    let count = shelves.len();
    shelves
        .get_mut(location.shelf)
        .ok_or(Error::ShelfOutOfRange {
            index: location.shelf,
            count,
        })?
        .slot_mut(location.slot)
}

fn log_rejection(op: &'static str, err: &Error) {
    warn!(op, error = %err, "storage operation rejected");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i32) -> Item {
        Item::book("Book", "desc", id, "Title", "Author", "2000")
    }

    fn id_at(lib: &LibraryStorage, shelf: usize, slot: usize) -> Option<i32> {
        lib[shelf][slot].get().map(|i| i.id().0)
    }

    #[test]
    fn test_new_storage_is_empty() {
        let lib = LibraryStorage::new(3);
        assert_eq!(lib.num_shelves(), 3);
        assert_eq!(lib.item_count(), 0);
        assert!(lib.checked_out().is_empty());
    }

    #[test]
    fn test_default_has_three_shelves() {
        assert_eq!(LibraryStorage::default().num_shelves(), 3);
    }

    #[test]
    #[should_panic(expected = "num_shelves must be > 0")]
    fn test_zero_shelves_panics() {
        let _ = LibraryStorage::new(0);
    }

    #[test]
    fn test_add_item() {
        let mut lib = LibraryStorage::new(3);
        lib.add_item(book(1), 2, 4).unwrap();
        assert_eq!(id_at(&lib, 2, 4), Some(1));
        assert_eq!(lib.item_count(), 1);
    }

    #[test]
    fn test_add_item_rejects_bad_indices() {
        let mut lib = LibraryStorage::new(3);

        let err = lib.add_item(book(1), 3, 0).unwrap_err();
        assert!(matches!(err, Error::ShelfOutOfRange { index: 3, count: 3 }));

        let err = lib.add_item(book(1), 0, 15).unwrap_err();
        assert!(matches!(err, Error::SlotOutOfRange { index: 15, .. }));

        assert_eq!(lib.item_count(), 0);
    }

    #[test]
    fn test_add_item_occupied() {
        let mut lib = LibraryStorage::new(3);
        lib.add_item(book(1), 0, 0).unwrap();

        let err = lib.add_item(book(2), 0, 0).unwrap_err();
        assert!(matches!(err, Error::SlotOccupied(l) if l == Location::new(0, 0)));
        assert_eq!(id_at(&lib, 0, 0), Some(1));
    }

    #[test]
    fn test_remove_item() {
        let mut lib = LibraryStorage::new(3);
        lib.add_item(book(7), 1, 1).unwrap();

        let item = lib.remove_item(1, 1).unwrap();
        assert_eq!(item.id().0, 7);
        assert!(lib[1][1].is_empty());

        let err = lib.remove_item(1, 1).unwrap_err();
        assert!(matches!(err, Error::SlotEmpty(_)));
    }

    #[test]
    fn test_remove_item_rejects_bad_indices() {
        let mut lib = LibraryStorage::new(3);
        lib.add_item(book(1), 0, 0).unwrap();

        let err = lib.remove_item(3, 0).unwrap_err();
        assert!(matches!(err, Error::ShelfOutOfRange { index: 3, count: 3 }));

        let err = lib.remove_item(0, 15).unwrap_err();
        assert!(matches!(err, Error::SlotOutOfRange { index: 15, .. }));

        assert_eq!(lib.item_count(), 1);
        assert_eq!(id_at(&lib, 0, 0), Some(1));
    }

    #[test]
    fn test_checkout_rejects_bad_indices() {
        let mut lib = LibraryStorage::new(3);
        lib.add_item(book(1), 2, 14).unwrap();

        let err = lib.checkout_item(5, 0, "Alice", "2025-12-01").unwrap_err();
        assert!(matches!(err, Error::ShelfOutOfRange { index: 5, count: 3 }));

        let err = lib.checkout_item(2, 15, "Alice", "2025-12-01").unwrap_err();
        assert!(matches!(err, Error::SlotOutOfRange { index: 15, .. }));

        assert!(lib.checked_out().is_empty());
        assert_eq!(lib.item_count(), 1);
        assert_eq!(id_at(&lib, 2, 14), Some(1));
    }

    #[test]
    fn test_checkout_and_checkin() {
        let mut lib = LibraryStorage::new(3);
        lib.add_item(book(1), 2, 4).unwrap();

        lib.checkout_item(2, 4, "Alice", "2025-12-01").unwrap();
        assert!(lib[2][4].is_empty());
        assert_eq!(lib.checked_out().len(), 1);

        let rec = lib.find_checkout(Location::new(2, 4)).unwrap();
        assert_eq!(rec.person(), "Alice");
        assert_eq!(rec.due_date(), "2025-12-01");
        assert_eq!(rec.item().id().0, 1);

        lib.checkin_item(2, 4).unwrap();
        assert_eq!(id_at(&lib, 2, 4), Some(1));
        assert!(lib.checked_out().is_empty());
    }

    #[test]
    fn test_checkout_empty_slot() {
        let mut lib = LibraryStorage::new(3);
        let err = lib.checkout_item(0, 1, "Bob", "2025-11-30").unwrap_err();
        assert!(matches!(err, Error::SlotEmpty(l) if l == Location::new(0, 1)));
        assert!(lib.checked_out().is_empty());
    }

    #[test]
    fn test_checkin_without_record() {
        let mut lib = LibraryStorage::new(3);
        let err = lib.checkin_item(0, 1).unwrap_err();
        assert!(matches!(err, Error::NotCheckedOut(_)));
    }

    #[test]
    fn test_checkin_into_refilled_slot() {
        let mut lib = LibraryStorage::new(3);
        lib.add_item(book(1), 0, 0).unwrap();
        lib.checkout_item(0, 0, "Alice", "tomorrow").unwrap();
        lib.add_item(book(2), 0, 0).unwrap();

        let err = lib.checkin_item(0, 0).unwrap_err();
        assert!(matches!(err, Error::SlotOccupied(_)));

        // Nothing moved
        assert_eq!(id_at(&lib, 0, 0), Some(2));
        assert_eq!(lib.checked_out().len(), 1);
    }

    #[test]
    fn test_checkin_first_match_wins() {
        let mut lib = LibraryStorage::new(1);
        lib.add_item(book(1), 0, 0).unwrap();
        lib.checkout_item(0, 0, "Alice", "d1").unwrap();
        lib.add_item(book(2), 0, 0).unwrap();
        lib.checkout_item(0, 0, "Bob", "d2").unwrap();

        lib.checkin_item(0, 0).unwrap();
        assert_eq!(id_at(&lib, 0, 0), Some(1));
        assert_eq!(lib.checked_out()[0].person(), "Bob");
    }

    #[test]
    fn test_swap_same_shelf() {
        let mut lib = LibraryStorage::new(3);
        lib.add_item(book(1), 0, 0).unwrap();
        lib.add_item(book(2), 0, 5).unwrap();

        lib.swap_items(0, 5, 0, 0).unwrap();
        assert_eq!(id_at(&lib, 0, 0), Some(2));
        assert_eq!(id_at(&lib, 0, 5), Some(1));
    }

    #[test]
    fn test_swap_across_shelves() {
        let mut lib = LibraryStorage::new(3);
        lib.add_item(book(1), 2, 0).unwrap();
        lib.add_item(book(2), 0, 14).unwrap();

        lib.swap_items(2, 0, 0, 14).unwrap();
        assert_eq!(id_at(&lib, 2, 0), Some(2));
        assert_eq!(id_at(&lib, 0, 14), Some(1));

        lib.swap_items(0, 14, 2, 0).unwrap();
        assert_eq!(id_at(&lib, 2, 0), Some(1));
        assert_eq!(id_at(&lib, 0, 14), Some(2));
    }

    #[test]
    fn test_swap_with_self_is_noop() {
        let mut lib = LibraryStorage::new(3);
        lib.add_item(book(1), 1, 1).unwrap();
        lib.swap_items(1, 1, 1, 1).unwrap();
        assert_eq!(id_at(&lib, 1, 1), Some(1));
    }

    #[test]
    fn test_swap_rejections() {
        let mut lib = LibraryStorage::new(3);
        lib.add_item(book(1), 0, 0).unwrap();

        let err = lib.swap_items(0, 0, 0, 1).unwrap_err();
        assert!(matches!(err, Error::SlotEmpty(l) if l == Location::new(0, 1)));

        let err = lib.swap_items(0, 0, 9, 0).unwrap_err();
        assert!(matches!(err, Error::ShelfOutOfRange { index: 9, .. }));

        let err = lib.swap_items(0, 0, 1, 20).unwrap_err();
        assert!(matches!(err, Error::SlotOutOfRange { index: 20, .. }));

        assert_eq!(id_at(&lib, 0, 0), Some(1));
    }

    #[test]
    fn test_swap_checks_indices_before_occupancy() {
        let mut lib = LibraryStorage::new(3);

        // Both slots empty, second index bad: the index error wins
        let err = lib.swap_items(0, 0, 0, 20).unwrap_err();
        assert!(matches!(err, Error::SlotOutOfRange { index: 20, .. }));

        let err = lib.swap_items(0, 0, 1, 1).unwrap_err();
        assert!(matches!(err, Error::SlotEmpty(l) if l == Location::new(0, 0)));
    }

    #[test]
    fn test_print_items_in_storage() {
        let mut lib = LibraryStorage::new(2);
        lib.add_item(Item::magazine("M", "d", 3, "E", "A"), 1, 14).unwrap();
        lib.add_item(book(1), 0, 2).unwrap();

        let mut out = Vec::new();
        lib.print_items_in_storage(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Items in storage:");
        assert!(lines[1].starts_with(" Shelf 0 Compartment 2 -> Book[id=1"));
        assert!(lines[2].starts_with(" Shelf 1 Compartment 14 -> Magazine[id=3"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_print_checked_out_items() {
        let mut lib = LibraryStorage::new(3);

        let mut out = Vec::new();
        lib.print_checked_out_items(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Checked-out items:\n (none)\n");

        lib.add_item(book(1), 2, 4).unwrap();
        lib.checkout_item(2, 4, "Alice", "2025-12-01").unwrap();

        let mut out = Vec::new();
        lib.print_checked_out_items(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(" From (2, 4) -> Book[id=1"));
        assert!(text.ends_with("| Person: Alice | Due: 2025-12-01\n"));
    }

    #[test]
    #[should_panic(expected = "Shelf 3 does not exist")]
    fn test_index_shelf_out_of_range() {
        let lib = LibraryStorage::new(3);
        let _ = &lib[3];
    }

    #[test]
    #[should_panic(expected = "Compartment index 15 out of range")]
    fn test_index_slot_out_of_range() {
        let lib = LibraryStorage::new(3);
        let _ = &lib[0][15];
    }
}
