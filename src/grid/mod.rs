// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Relation grid and pairing index.
//!
//! The relation grid maps every unordered pair of nouns from two different
//! types to the mark, if any, asserting their relation. Only type pairs with
//! `t1 < t2` are stored. Type pairs are enumerated into a gap-free range of
//! grid numbers with a triangular-number offset, so no type×type matrix is
//! ever allocated:
//!
//! ```text
//! grid(t1, t2) = (t1 - 1) * T + t2 - t1 * (t1 + 1) / 2      (1-based, t1 < t2)
//! cell         = ((grid - 1) * N + (n1 - 1)) * N + (n2 - 1)
//! ```

pub mod link;
pub mod pairing;

pub use link::Link;
pub use pairing::PairingIndex;

use crate::catalog::{grid_count, Noun, Verb};
use crate::ledger::MarkId;

/// Contents of an occupied grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridEntry {
    pub mark: MarkId,
    pub verb: Verb,
}

/// Dense O(1) lookup from noun pair to the mark asserting its relation.
#[derive(Debug, Default)]
pub struct RelationGrid {
    /// Number of noun types (T)
    num_types: usize,
    /// Nouns per type (N)
    nouns_per_type: usize,
    cells: Vec<Option<GridEntry>>,
}

impl RelationGrid {
    pub fn new(num_types: usize, nouns_per_type: usize) -> Self {
        let size = grid_count(num_types) * nouns_per_type * nouns_per_type;
        Self {
            num_types,
            nouns_per_type,
            cells: vec![None; size],
        }
    }

    /// One-based grid number for two distinct one-based type numbers, in either order.
    pub fn grid_num(&self, t1: usize, t2: usize) -> usize {
        let (lo, hi) = if t1 < t2 { (t1, t2) } else { (t2, t1) };
        (lo - 1) * self.num_types + hi - lo * (lo + 1) / 2
    }

    /// Cell index for two nouns, or None if they share a type.
    fn index(&self, a: &Noun, b: &Noun) -> Option<usize> {
        if a.type_num == b.type_num {
            return None;
        }
        let (lo, hi) = if a.type_num < b.type_num { (a, b) } else { (b, a) };
        let g = self.grid_num(lo.type_num, hi.type_num);
        let n = self.nouns_per_type;
        Some(((g - 1) * n + (lo.num - 1)) * n + (hi.num - 1))
    }

    /// The entry for a noun pair, in either order. Same-type pairs have no cell.
    pub fn get(&self, a: &Noun, b: &Noun) -> Option<GridEntry> {
        self.index(a, b).and_then(|i| self.cells[i])
    }

    /// Verb for a noun pair. Same-type nouns are never the same entity, so they yield `IsNot`.
    pub fn lookup(&self, a: &Noun, b: &Noun) -> Verb {
        if a.same_type(b) {
            return Verb::IsNot;
        }
        self.get(a, b).map_or(Verb::Maybe, |entry| entry.verb)
    }

    pub(crate) fn set(&mut self, a: &Noun, b: &Noun, entry: GridEntry) {
        if let Some(i) = self.index(a, b) {
            self.cells[i] = Some(entry);
        }
    }

    pub(crate) fn clear(&mut self, a: &Noun, b: &Noun) {
        if let Some(i) = self.index(a, b) {
            self.cells[i] = None;
        }
    }

    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    /// Number of cells, equal to the ledger capacity.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}
