//! Interactive menu over a [`LibraryStorage`].
//!
//! The shell borrows the storage it drives; `main` builds that storage and
//! hands it in. Input and output are generic so tests can script a session.

mod prompt;

pub use prompt::{split_list, Prompter};

use std::fmt;
use std::io::{BufRead, Write};

use tracing::info;

use crate::common::config::SLOTS_PER_SHELF;
use crate::common::{Error, Result};
use crate::demo::run_demo;
use crate::item::Item;
use crate::storage::LibraryStorage;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    Checkout,
    Checkin,
    Swap,
    ShowStorage,
    ShowCheckedOut,
    RunDemo,
    Quit,
}

impl MenuChoice {
    /// Menu entries in display order; entry `i` is numbered `i + 1`.
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::Add,
        MenuChoice::Remove,
        MenuChoice::Checkout,
        MenuChoice::Checkin,
        MenuChoice::Swap,
        MenuChoice::ShowStorage,
        MenuChoice::ShowCheckedOut,
        MenuChoice::RunDemo,
        MenuChoice::Quit,
    ];

    /// Look up a 1-based menu number.
    pub fn from_number(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuChoice::Add => "Add item",
            MenuChoice::Remove => "Remove item",
            MenuChoice::Checkout => "Check out item",
            MenuChoice::Checkin => "Check in item",
            MenuChoice::Swap => "Swap items",
            MenuChoice::ShowStorage => "Show storage",
            MenuChoice::ShowCheckedOut => "Show checked-out items",
            MenuChoice::RunDemo => "Run demo",
            MenuChoice::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Whether the session continues after a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Unwrap a prompt answer, ending the session when input runs out.
macro_rules! answer {
    ($e:expr) => {
        match $e? {
            Some(value) => value,
            None => return Ok(Flow::Quit),
        }
    };
}

/// Menu-driven session over one storage.
#[derive(Debug)]
pub struct Shell<'a, R, W> {
    storage: &'a mut LibraryStorage,
    prompt: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(storage: &'a mut LibraryStorage, input: R, out: W) -> Self {
        Self {
            storage,
            prompt: Prompter::new(input, out),
        }
    }

    /// Run until Quit is chosen or input ends.
    pub fn run(&mut self) -> Result<()> {
        info!(shelves = self.storage.num_shelves(), "shell started");

        loop {
            self.print_menu()?;
            let choice = self
                .prompt
                .read_in_range("Choice: ", 1..=MenuChoice::ALL.len())?
                .and_then(MenuChoice::from_number)
                .unwrap_or(MenuChoice::Quit);

            if self.dispatch(choice)? == Flow::Quit {
                break;
            }
        }

        writeln!(self.prompt.out(), "Goodbye.")?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        let out = self.prompt.out();
        writeln!(out, "\n=== Library Inventory ===")?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, choice)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::Remove => self.remove(),
            MenuChoice::Checkout => self.checkout(),
            MenuChoice::Checkin => self.checkin(),
            MenuChoice::Swap => self.swap(),
            MenuChoice::ShowStorage => {
                self.storage.print_items_in_storage(self.prompt.out())?;
                Ok(Flow::Continue)
            }
            MenuChoice::ShowCheckedOut => {
                self.storage.print_checked_out_items(self.prompt.out())?;
                Ok(Flow::Continue)
            }
            MenuChoice::RunDemo => {
                run_demo(self.prompt.out())?;
                Ok(Flow::Continue)
            }
            MenuChoice::Quit => Ok(Flow::Quit),
        }
    }

    // ========================================================================
    // Handlers
    // ========================================================================

    fn add(&mut self) -> Result<Flow> {
        let kind = answer!(self
            .prompt
            .read_in_range("Type (1 = Book, 2 = Movie, 3 = Magazine): ", 1..=3u8));
        let id = answer!(self.prompt.read_in_range("Id: ", i32::MIN..=i32::MAX));
        let name = answer!(self.prompt.read_line("Name: "));
        let description = answer!(self.prompt.read_line("Description: "));

        let item = match kind {
            1 => {
                let title = answer!(self.prompt.read_line("Title: "));
                let author = answer!(self.prompt.read_line("Author: "));
                let copyright = answer!(self.prompt.read_line("Copyright date: "));
                Item::book(name, description, id, title, author, copyright)
            }
            2 => {
                let title = answer!(self.prompt.read_line("Title: "));
                let director = answer!(self.prompt.read_line("Director: "));
                let actors = answer!(self.prompt.read_list("Main actors (comma-separated): "));
                Item::movie(name, description, id, title, director, actors)
            }
            _ => {
                let edition = answer!(self.prompt.read_line("Edition: "));
                let article = answer!(self.prompt.read_line("Main article title: "));
                Item::magazine(name, description, id, edition, article)
            }
        };

        let (shelf, slot) = answer!(self.read_location(""));
        let result = self.storage.add_item(item, shelf, slot);
        self.report(result, "Item added.")
    }

    fn remove(&mut self) -> Result<Flow> {
        let (shelf, slot) = answer!(self.read_location(""));
        match self.storage.remove_item(shelf, slot) {
            Ok(item) => {
                writeln!(self.prompt.out(), "Removed {}", item)?;
                Ok(Flow::Continue)
            }
            Err(e) => self.report(Err(e), ""),
        }
    }

    fn checkout(&mut self) -> Result<Flow> {
        let (shelf, slot) = answer!(self.read_location(""));
        let person = answer!(self.prompt.read_line("Person: "));
        let due = answer!(self.prompt.read_line("Due date: "));
        let result = self.storage.checkout_item(shelf, slot, person, due);
        self.report(result, "Item checked out.")
    }

    fn checkin(&mut self) -> Result<Flow> {
        let (shelf, slot) = answer!(self.read_location(""));
        let result = self.storage.checkin_item(shelf, slot);
        self.report(result, "Item checked in.")
    }

    fn swap(&mut self) -> Result<Flow> {
        let (s1, c1) = answer!(self.read_location("First "));
        let (s2, c2) = answer!(self.read_location("Second "));
        let result = self.storage.swap_items(s1, c1, s2, c2);
        self.report(result, "Items swapped.")
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Ask for a shelf and a slot index, both range-checked.
    fn read_location(&mut self, label: &str) -> Result<Option<(usize, usize)>> {
        let last_shelf = self.storage.num_shelves() - 1;
        let Some(shelf) = self
            .prompt
            .read_in_range(&format!("{}shelf (0-{}): ", label, last_shelf), 0..=last_shelf)?
        else {
            return Ok(None);
        };
        let last_slot = SLOTS_PER_SHELF - 1;
        let Some(slot) = self
            .prompt
            .read_in_range(&format!("{}slot (0-{}): ", label, last_slot), 0..=last_slot)?
        else {
            return Ok(None);
        };
        Ok(Some((shelf, slot)))
    }

    /// Print the outcome of a storage call. I/O failures end the session.
    fn report(&mut self, result: Result<()>, success: &str) -> Result<Flow> {
        match result {
            Ok(()) => writeln!(self.prompt.out(), "{}", success)?,
            Err(Error::Io(e)) => return Err(Error::Io(e)),
            Err(e) => writeln!(self.prompt.out(), "Error: {}", e)?,
        }
        Ok(Flow::Continue)
    }
}
