// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Demo: solve a small three-type puzzle on a worker thread and print the
//! level statistics.
//!
//! ```bash
//! RUST_LOG=logic_grid=debug cargo run --bin grid
//! ```

use logic_grid::agents::test::{ExclusionLawyer, GuessingFinder};
use logic_grid::catalog::Catalog;
use logic_grid::config::{MemoryLocker, SolverConfig, Spot};
use logic_grid::context::SolverContext;
use logic_grid::engine::{Coordinator, Job, SilentViewer};
use logic_grid::state::LevelCounter;
use logic_grid::{Verb, MAX_LEVELS};
use std::error::Error;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let catalog = Arc::new(
        Catalog::builder()
            .noun_type("Color", &["Red", "Blue", "Green"])
            .noun_type("Pet", &["Cat", "Dog", "Fish"])
            .noun_type("Drink", &["Tea", "Milk", "Water"])
            .build()?,
    );

    // Nothing persisted: every option takes its default, minus the pauses.
    let config = SolverConfig::load(&MemoryLocker::new()).with(Spot::PauseSolution, false);
    let ctx = SolverContext::new(Arc::clone(&catalog), config, Arc::new(SilentViewer));
    let mut coordinator = Coordinator::new(ctx, Box::new(GuessingFinder::new()), Box::new(ExclusionLawyer::new()));

    coordinator.start(Job::Search)?;
    let report = coordinator.join()?;
    println!(
        "Search finished: {} solutions, {} marks left, stopped={}",
        report.solutions, report.marks, report.stopped
    );

    coordinator.with_context(|ctx| {
        println!("{}", LevelCounter::column_headers().join("\t"));
        let rows = LevelCounter::row_headers();
        for level in 1..=MAX_LEVELS {
            let counts: Vec<String> = ctx.stats().marks(level).counts().iter().map(i64::to_string).collect();
            println!("{}\t{}", rows[level], counts.join("\t"));
        }
        println!("guesses entered: {}", ctx.ledger().num_guesses());
    })?;

    // Enter one mark by hand, let the lawyer validate it, then retract it.
    let red = catalog.find_noun("Red").ok_or("no Red")?;
    let cat = catalog.find_noun("Cat").ok_or("no Cat")?;
    let status = coordinator.submit_user_mark(red, Verb::Is, cat)?;
    let validated = coordinator.join()?;
    println!("User mark {:?}: {} marks after validation", status, validated.marks);

    coordinator.start(Job::Retract)?;
    let retracted = coordinator.join()?;
    println!("After retraction: {} marks", retracted.marks);
    Ok(())
}
