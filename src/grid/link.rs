// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Links: relations between nouns of one slot type, such as "next to".
//!
//! A link is defined by the puzzle (e.g. houses 1..5 with "left of").
//! The solving context uses links to ask whether two nouns could still end
//! up in linked slots; see `SolverContext::maybe_related`.

use crate::catalog::{NounId, Verb};

pub trait Link {
    /// One-based number of the noun type whose nouns are the link's slots.
    fn noun_type(&self) -> usize;

    /// Whether slot `a` is linked to slot `b`. Slots are nouns of `noun_type()`.
    fn verb(&self, a: NounId, b: NounId) -> Verb;
}
