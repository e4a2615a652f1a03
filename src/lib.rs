//! Library Inventory - shelves of slots holding books, movies and magazines.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Library Inventory                         │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Shell (shell/)  +  Demo (demo.rs)              │   │
//! │  │     menu → prompts → LibraryStorage calls → listings    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                Storage (storage/)                       │   │
//! │  │   LibraryStorage: Vec<Shelf> + checked-out records      │   │
//! │  │   Shelf: [Slot; 15]      Slot: Option<Item>             │   │
//! │  │   SharedStorage: Arc<Mutex<LibraryStorage>>             │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                  Items (item/)                          │   │
//! │  │        Item { id, name, description, kind }             │   │
//! │  │        kind: Book | Movie | Magazine                    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (ItemId, Location, Error, config)
//! - [`item`] - The item record and its variants
//! - [`storage`] - Slots, shelves and the storage operations. The CLI owns a
//!   plain `LibraryStorage`; `SharedStorage` is only for multi-threaded
//!   library callers.
//! - [`shell`] - Interactive menu
//! - [`demo`] - Scripted walkthrough
//!
//! # Quick Start
//! ```
//! use library_inventory::{Item, LibraryStorage};
//!
//! let mut lib = LibraryStorage::default();
//! lib.add_item(Item::magazine("Tech Monthly", "Latest in tech", 3, "Vol 10", "AI"), 1, 14)?;
//!
//! let mut out = Vec::new();
//! lib.print_items_in_storage(&mut out)?;
//! assert!(String::from_utf8(out).unwrap().contains("Shelf 1 Compartment 14"));
//! # Ok::<(), library_inventory::Error>(())
//! ```

pub mod common;
pub mod demo;
pub mod item;
pub mod shell;
pub mod storage;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_SHELF_COUNT, SLOTS_PER_SHELF};
pub use common::{Error, ItemId, Location, Result};

pub use item::{Item, ItemKind};
pub use shell::Shell;
pub use storage::{CheckedOutRecord, LibraryStorage, SharedStorage, Shelf, Slot};
