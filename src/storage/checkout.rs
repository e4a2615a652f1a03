//! Checked-out records.

use std::fmt;

use crate::common::Location;
use crate::item::Item;

/// An item that has left its slot.
///
/// The record owns the item for as long as it is checked out and remembers
/// where it came from, so checkin can put it back.
#[derive(Debug)]
pub struct CheckedOutRecord {
    pub(crate) item: Item,
    pub(crate) origin: Location,
    pub(crate) person: String,
    pub(crate) due_date: String,
}

impl CheckedOutRecord {
    #[inline]
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// Slot the item was checked out from.
    #[inline]
    pub fn origin(&self) -> Location {
        self.origin
    }

    #[inline]
    pub fn person(&self) -> &str {
        &self.person
    }

    #[inline]
    pub fn due_date(&self) -> &str {
        &self.due_date
    }
}

impl fmt::Display for CheckedOutRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "From {} -> {} | Person: {} | Due: {}",
            self.origin, self.item, self.person, self.due_date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_display() {
        let rec = CheckedOutRecord {
            item: Item::magazine("Tech Monthly", "Latest in tech", 3, "Vol 10", "AI"),
            origin: Location::new(1, 14),
            person: "Bob".to_string(),
            due_date: "2025-11-30".to_string(),
        };

        assert_eq!(
            rec.to_string(),
            "From (1, 14) -> Magazine[id=3, name=\"Tech Monthly\", edition=\"Vol 10\", \
             mainArticle=\"AI\", desc=\"Latest in tech\"] | Person: Bob | Due: 2025-11-30"
        );
        assert_eq!(rec.person(), "Bob");
        assert_eq!(rec.origin(), Location::new(1, 14));
    }
}
