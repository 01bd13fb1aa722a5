// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solver context: the session object every operation runs against.
//!
//! The SolverContext owns the whole mutable state of one solving session:
//! - Catalog: immutable nouns, facts and rules (shared)
//! - Ledger, grid, pairing index: the marks and their O(1) lookups
//! - Stats, hit counters: derived from ledger events
//! - Worker control: stop/busy flags and the pause gate (shared with the coordinator)
//!
//! There is no ambient state. Collaborators receive `&mut SolverContext`
//! and the observer receives `&SolverContext`.
//!
//! # Memory Model
//!
//! ```text
//! SolverContext {
//!     catalog: Arc<Catalog>,        // Immutable, shared
//!     ledger:  MarkLedger,          // Fixed-capacity arena, sized from the catalog
//!     grid:    RelationGrid,        // One cell per canonical noun pair
//!     pairing: PairingIndex,        // One slot per (noun, other type)
//!     stats, hits, ...              // Counters
//!     control: Arc<WorkerControl>,  // Shared with the coordinator
//! }
//! ```
//!
//! All arenas are allocated in [`SolverContext::set_catalog`] and only
//! cleared afterwards.

pub mod errors;
mod insert;
mod queries;
mod report;
mod rollback;

pub use errors::{MarkError, MarkStatus};

use crate::catalog::{Catalog, FactNum};
use crate::config::SolverConfig;
use crate::engine::{Viewer, WorkerControl};
use crate::grid::{PairingIndex, RelationGrid};
use crate::ledger::{Mark, MarkId, MarkLedger};
use crate::state::{HitCounters, Stats};
use chrono::{DateTime, Local};
use std::sync::Arc;
use tracing::error;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

pub struct SolverContext {
    catalog: Arc<Catalog>,
    ledger: MarkLedger,
    grid: RelationGrid,
    pairing: PairingIndex,
    stats: Stats,
    hits: HitCounters,
    /// Facts not disabled by a live mark, indexed by fact number - 1.
    fact_enabled: Vec<bool>,
    /// Number of marks the lawyer has confirmed.
    num_valid: usize,
    num_solutions: usize,
    /// When solving began, either a search or the user's first mark.
    started_at: Option<DateTime<Local>>,
    config: SolverConfig,
    viewer: Arc<dyn Viewer>,
    control: Arc<WorkerControl>,
}

impl SolverContext {
    pub fn new(catalog: Arc<Catalog>, config: SolverConfig, viewer: Arc<dyn Viewer>) -> Self {
        let mut ctx = Self {
            catalog: Arc::new(Catalog::empty()),
            ledger: MarkLedger::default(),
            grid: RelationGrid::default(),
            pairing: PairingIndex::default(),
            stats: Stats::new(),
            hits: HitCounters::default(),
            fact_enabled: Vec::new(),
            num_valid: 0,
            num_solutions: 0,
            started_at: None,
            config,
            viewer,
            control: Arc::new(WorkerControl::new()),
        };
        ctx.set_catalog(Some(catalog));
        ctx
    }

    /// Attach a catalog (or none), sizing every arena from it, then reset.
    pub fn set_catalog(&mut self, catalog: Option<Arc<Catalog>>) {
        let catalog = catalog.unwrap_or_else(|| Arc::new(Catalog::empty()));
        let num_types = catalog.num_noun_types();
        self.ledger.resize(catalog.max_marks());
        self.grid = RelationGrid::new(num_types, catalog.nouns_per_type());
        self.pairing = PairingIndex::new(catalog.nouns().len(), num_types);
        self.hits = HitCounters::new(catalog.fact_count(), catalog.rule_count());
        self.fact_enabled = vec![true; catalog.fact_count()];
        self.catalog = catalog;
        self.reset();
    }

    /// Clear every mark and counter. Also clears a pending stop request.
    pub fn reset(&mut self) {
        self.ledger.reset();
        self.grid.reset();
        self.pairing.reset();
        self.stats.reset();
        self.hits.reset();
        self.fact_enabled.iter_mut().for_each(|on| *on = true);
        self.num_valid = 0;
        self.num_solutions = 0;
        self.started_at = None;
        self.control.clear_stop();
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &MarkLedger {
        &self.ledger
    }

    pub fn mark(&self, id: MarkId) -> &Mark {
        self.ledger.slot(id)
    }

    pub fn grid(&self) -> &RelationGrid {
        &self.grid
    }

    pub fn pairing(&self) -> &PairingIndex {
        &self.pairing
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn hits(&self) -> &HitCounters {
        &self.hits
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SolverConfig) {
        self.config = config;
    }

    pub fn control(&self) -> Arc<WorkerControl> {
        Arc::clone(&self.control)
    }

    pub fn num_valid(&self) -> usize {
        self.num_valid
    }

    pub fn num_solutions(&self) -> usize {
        self.num_solutions
    }

    /// Whether every mark of a complete solution is recorded and confirmed.
    pub fn is_solved(&self) -> bool {
        self.ledger.capacity() > 0 && self.num_valid == self.ledger.capacity()
    }

    pub fn stop_requested(&self) -> bool {
        self.control.stop_requested()
    }

    /// Whether a fact is in force, i.e. not disabled by a live mark.
    pub fn is_fact_enabled(&self, fact: FactNum) -> bool {
        self.fact_enabled[fact - 1]
    }

    /// Start the clock now, returning the formatted start time.
    pub fn start_clock(&mut self) -> String {
        let now = Local::now();
        self.started_at = Some(now);
        now.format(TIME_FORMAT).to_string()
    }

    /// Current wall-clock time, formatted.
    pub fn clock_stamp(&self) -> String {
        Local::now().format(TIME_FORMAT).to_string()
    }

    /// Milliseconds since solving began, or 0 if it has not.
    pub fn elapsed_ms(&self) -> i64 {
        self.started_at
            .map_or(0, |t| (Local::now() - t).num_milliseconds())
    }

    fn record_stats(&mut self, mark: MarkId, d: i64) {
        if let Err(err) = self.stats.update(self.ledger.slot(mark), d) {
            error!(%err, "statistics not updated");
        }
    }
}

impl std::fmt::Debug for SolverContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolverContext")
            .field("marks", &self.ledger.len())
            .field("capacity", &self.ledger.capacity())
            .field("num_valid", &self.num_valid)
            .field("num_solutions", &self.num_solutions)
            .field("stop", &self.stop_requested())
            .finish()
    }
}
