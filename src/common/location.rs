//! Slot coordinates.

use std::fmt;

/// Identifies a slot in storage by shelf and slot index.
///
/// Both indices are zero-based. A `Location` is only a pair of numbers;
/// whether it points inside a given storage is checked at use.
///
/// # Example
/// ```
/// use library_inventory::Location;
///
/// let loc = Location::new(2, 4);
/// assert_eq!(loc.to_string(), "(2, 4)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub shelf: usize,
    pub slot: usize,
}

impl Location {
    /// Create a new Location.
    #[inline]
    pub fn new(shelf: usize, slot: usize) -> Self {
        Location { shelf, slot }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.shelf, self.slot)
    }
}
