//! Walks through the roster aliasing demo and prints what a reader sees.

use ordered_roster::lifecycle::{run_demo, setup_tracing};
use ordered_roster::roster::RosterError;
use tracing::info;

fn main() -> Result<(), RosterError> {
    setup_tracing();

    info!("Starting roster demo");
    let report = run_demo()?;
    println!("{report}");

    info!("Demo completed successfully");
    Ok(())
}
