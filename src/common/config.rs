//! Configuration constants for the library inventory.

/// Number of slots on every shelf.
///
/// Shelves are fixed-size: a shelf always has exactly this many slots,
/// indexed `0..SLOTS_PER_SHELF`, whether or not they hold anything.
pub const SLOTS_PER_SHELF: usize = 15;

/// Number of shelves a storage gets when none is specified.
pub const DEFAULT_SHELF_COUNT: usize = 3;

/// Upper bound accepted by the command line for `--shelves`.
pub const MAX_SHELF_COUNT: usize = 64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid() {
        assert_eq!(SLOTS_PER_SHELF, 15);
        assert_eq!(DEFAULT_SHELF_COUNT, 3);
    }

    #[test]
    fn test_default_within_max() {
        assert!(DEFAULT_SHELF_COUNT <= MAX_SHELF_COUNT);
    }
}
