//! Item identifier type.

use std::fmt;

/// Identifies an item in the inventory.
///
/// Ids are handed out by whoever creates the item. The storage never checks
/// them for uniqueness; two items may share an id.
///
/// # Example
/// ```
/// use library_inventory::ItemId;
///
/// let id = ItemId::new(42);
/// assert_eq!(id.0, 42);
/// assert_eq!(id.to_string(), "Item(42)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub i32);

impl ItemId {
    /// Create a new ItemId.
    #[inline]
    pub fn new(id: i32) -> Self {
        ItemId(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Item({})", self.0)
    }
}
