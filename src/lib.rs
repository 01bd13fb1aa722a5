// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solving core for logic-grid deduction puzzles.
//!
//! A puzzle is a set of nouns grouped into noun types of equal size. Solving
//! decides, for every pair of nouns of different types, whether they are the
//! same entity (`Is`), different entities (`IsNot`), or not yet known (`Maybe`).
//!
//! # Architecture
//!
//! ## Catalog (immutable)
//!
//! Nouns, noun types, fact and rule texts. Built once by a loader and shared
//! as `Arc<Catalog>`. Every capacity below is derived from it:
//! - grids = T(T-1)/2 for T noun types
//! - pairs = grids × N for N nouns per type
//! - marks = pairs × N, one per grid cell
//!
//! ## Session state (mutable, owned by one worker at a time)
//!
//! - Ledger: append-only, LIFO-undoable history of marks in a fixed-capacity arena
//! - Relation grid: O(1) lookup from noun pair to the mark asserting it
//! - Pairing index: each noun's positively related partner in every other type
//! - Statistics: per-level mark and pair counts, by provenance
//!
//! # Solving
//!
//! Marks are proposed by two collaborators supplied by the application:
//!
//! 1. **Finder**: picks the next mark to try and guesses at the deepest level
//! 2. **Lawyer**: validates every non-user mark as soon as it is recorded,
//!    reentrantly entering the marks it forces
//!
//! The finder backtracks by undoing to its last level mark. An operator can
//! enter marks by hand and retract them again, undoing to the last user mark.
//!
//! # Concurrency
//!
//! The [`engine::Coordinator`] runs one job at a time on a worker thread.
//! The worker can be paused after any notification and resumed or stopped
//! from the controlling thread.

pub mod agents;
pub mod catalog;
pub mod config;
pub mod context;
pub mod engine;
pub mod grid;
pub mod ledger;
pub mod state;

// Re-export commonly used types
pub use catalog::{Catalog, NounId, Verb, MAX_LAWS, MAX_LEVELS};
pub use config::SolverConfig;
pub use context::{MarkError, MarkStatus, SolverContext};
pub use engine::{Coordinator, Finder, Job, Lawyer, SolverEvent, Viewer};
pub use ledger::{Mark, MarkId, MarkKind, MarkRequest};
