//! Scripted walkthrough of the storage operations.
//!
//! Builds a fresh three-shelf storage, stocks it, and exercises checkout,
//! swap and checkin, including the expected failures, writing a narrated
//! log to `out`. Rejected operations also show up as `warn` diagnostics.

use std::io::Write;

use crate::common::{Error, Result};
use crate::item::Item;
use crate::storage::LibraryStorage;

/// Run the demo and return the storage in its final state.
pub fn run_demo<W: Write>(out: &mut W) -> Result<LibraryStorage> {
    writeln!(out, "Library Inventory System demo\n")?;

    let mut lib = LibraryStorage::new(3);

    writeln!(out, "Adding items...")?;
    lib.add_item(
        Item::book(
            "The C++ Guide",
            "Comprehensive guide to C++",
            1,
            "C++ Guide",
            "Bjarne Stroustrup",
            "2013",
        ),
        2,
        4,
    )?;
    lib.add_item(
        Item::movie(
            "A Great Movie",
            "An epic tale",
            2,
            "A Great Movie",
            "Director X",
            vec!["Actor A".to_string(), "Actor B".to_string()],
        ),
        0,
        0,
    )?;
    lib.add_item(
        Item::magazine("Tech Monthly", "Latest in tech", 3, "Vol 10", "The Future of AI"),
        1,
        14,
    )?;

    write!(out, "Accessing via index: storage[2][4] -> ")?;
    match lib.slot_at(2, 4).map(|slot| slot.get()) {
        Ok(Some(item)) => writeln!(out, "{}", item)?,
        Ok(None) => writeln!(out, "(empty)")?,
        Err(e) => writeln!(out, "Error accessing compartment: {}", e)?,
    }

    writeln!(out, "\nCurrent storage state:")?;
    lib.print_items_in_storage(out)?;
    writeln!(out)?;

    writeln!(out, "Checking out item at (2,4) by Alice, due 2025-12-01...")?;
    lib.checkout_item(2, 4, "Alice", "2025-12-01")?;

    writeln!(out, "Attempting to checkout empty slot (0,1)...")?;
    if let Err(e) = lib.checkout_item(0, 1, "Bob", "2025-11-30") {
        writeln!(out, "Checkout failed as expected: {}", e)?;
    }

    writeln!(out, "\nAfter checkout:")?;
    lib.print_items_in_storage(out)?;
    writeln!(out)?;
    lib.print_checked_out_items(out)?;
    writeln!(out)?;

    writeln!(out, "Swapping items at (0,0) and (1,14)...")?;
    report(out, lib.swap_items(0, 0, 1, 14), "Swap succeeded.", "Swap failed.")?;

    writeln!(out, "Attempting swap where one is empty: (0,0) and (0,1)...")?;
    report(
        out,
        lib.swap_items(0, 0, 0, 1),
        "Swap succeeded.",
        "Swap failed as expected.",
    )?;

    writeln!(out, "\nState after swaps:")?;
    lib.print_items_in_storage(out)?;
    writeln!(out, "\nChecked out items:")?;
    lib.print_checked_out_items(out)?;
    writeln!(out)?;

    writeln!(out, "Checking in item back to (2,4)...")?;
    report(out, lib.checkin_item(2, 4), "Checkin succeeded.", "Checkin failed.")?;

    writeln!(out, "\nFinal storage state:")?;
    lib.print_items_in_storage(out)?;
    writeln!(out, "\nFinal checked-out list:")?;
    lib.print_checked_out_items(out)?;

    writeln!(
        out,
        "\nDemonstrating error: attempt to checkin at (0,1) which isn't checked out..."
    )?;
    if lib.checkin_item(0, 1).is_err() {
        writeln!(out, "Expected failure when checking in non-checked-out item.")?;
    }

    writeln!(out, "\nDemo complete.")?;
    Ok(lib)
}

fn report<W: Write>(out: &mut W, result: Result<()>, ok: &str, failed: &str) -> Result<()> {
    match result {
        Ok(()) => writeln!(out, "{}", ok)?,
        Err(Error::Io(e)) => return Err(Error::Io(e)),
        Err(_) => writeln!(out, "{}", failed)?,
    }
    Ok(())
}
