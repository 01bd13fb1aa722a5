// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Counters derived from ledger events.
//!
//! - Stats: per-level mark and pair tables, updated on every insert and removal
//! - HitCounters: how often each fact and rule took part in a mark or violation

pub mod counters;
pub mod statistics;

pub use counters::HitCounters;
pub use statistics::{LevelCounter, Stats, StatsError};
