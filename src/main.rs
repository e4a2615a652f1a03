//! library-inventory CLI entrypoint

use std::io;

use anyhow::Result;
use clap::builder::TypedValueParser;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use library_inventory::common::config::{DEFAULT_SHELF_COUNT, MAX_SHELF_COUNT};
use library_inventory::demo::run_demo;
use library_inventory::{LibraryStorage, Shell};

/// Library inventory: shelves of slots holding books, movies and magazines
#[derive(Parser, Debug)]
#[command(name = "library-inventory")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of shelves (15 slots each)
    #[arg(short, long, default_value_t = DEFAULT_SHELF_COUNT,
          value_parser = clap::value_parser!(u64).range(1..=MAX_SHELF_COUNT as u64).map(|n| n as usize))]
    shelves: usize,

    /// Run the scripted demo and exit
    #[arg(long)]
    demo: bool,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr so listings on stdout stay clean
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let args = Args::parse();

    let stdout = io::stdout();
    if args.demo {
        run_demo(&mut stdout.lock())?;
        return Ok(());
    }

    let mut storage = LibraryStorage::new(args.shelves);
    let mut shell = Shell::new(&mut storage, io::stdin().lock(), stdout.lock());
    shell.run()?;
    Ok(())
}
