// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time bounds on search depth and law numbering.
//!
//! MAX_LEVELS can be configured at compile time via cargo features.
//!
//! # Supported MAX_LEVELS values
//!
//! - 2: Facts plus guessing only
//! - 3: Facts, one rule level, guessing
//! - 4: Facts, rules, chained rules, guessing - **default**
//! - 5: One extra deduction level before guessing
//!
//! # Example
//!
//! ```bash
//! # Default: MAX_LEVELS=4
//! cargo build
//!
//! # Build for MAX_LEVELS=3
//! cargo build --features max_levels_3
//! ```

/// Deepest assumption level reachable by a search.
///
/// Marks entered at this level by the search strategy are guesses.
/// Marks entered by the user are always filed at this level.
#[cfg(not(any(
    feature = "max_levels_2",
    feature = "max_levels_3",
    feature = "max_levels_4",
    feature = "max_levels_5"
)))]
pub const MAX_LEVELS: usize = 4;

#[cfg(feature = "max_levels_2")]
pub const MAX_LEVELS: usize = 2;

#[cfg(feature = "max_levels_3")]
pub const MAX_LEVELS: usize = 3;

#[cfg(feature = "max_levels_4")]
pub const MAX_LEVELS: usize = 4;

#[cfg(feature = "max_levels_5")]
pub const MAX_LEVELS: usize = 5;

/// Number of laws a validator may cite (law numbers are 1..=MAX_LAWS).
pub const MAX_LAWS: usize = 5;

/// Number of unordered noun-type pairs, i.e. grids, for `ntypes` noun types.
pub const fn grid_count(ntypes: usize) -> usize {
    if ntypes < 2 {
        0
    } else {
        ntypes * (ntypes - 1) / 2
    }
}
