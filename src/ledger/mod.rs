// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Append-only, LIFO-undoable history of marks.
//!
//! The ledger is a fixed-capacity arena of mark slots plus a length counter.
//! Capacity is computed from the catalog (`max_marks`) and never changes
//! while a puzzle is loaded, so slots are reused rather than reallocated.
//! Only the last entered mark can be removed.

pub mod mark;

pub use mark::{Mark, MarkId, MarkKind, MarkRequest, Placer};

use crate::catalog::{NounId, Verb};

/// The mark ledger.
///
/// # Memory Model
///
/// - Slots `0..len` are live marks, slots `len..capacity` are tombstones
///   (`valid == false`) that keep their last contents until reused
/// - Each SolverContext owns its own ledger
#[derive(Debug)]
pub struct MarkLedger {
    /// All pre-allocated slots
    slots: Vec<Mark>,
    /// Number of live marks
    len: usize,
    /// Number of guesses entered since the last reset (never decremented)
    num_guesses: usize,
    /// Number of live positive marks
    num_pairs: usize,
}

impl MarkLedger {
    /// Create a ledger with `capacity` pre-allocated slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(Mark::empty).collect(),
            len: 0,
            num_guesses: 0,
            num_pairs: 0,
        }
    }

    /// Reallocate slots for a new puzzle. Called only when a catalog is attached.
    pub(crate) fn resize(&mut self, capacity: usize) {
        *self = Self::new(capacity);
    }

    /// Clear the ledger and every slot.
    pub fn reset(&mut self) {
        self.len = 0;
        self.num_guesses = 0;
        self.num_pairs = 0;
        for mark in &mut self.slots {
            mark.reset();
        }
    }

    /// Append a mark whose nouns are already in canonical order.
    ///
    /// # Panics
    ///
    /// Panics if the ledger is full. Capacity equals the number of grid
    /// cells, so overflowing it means an upstream collaborator bypassed the
    /// duplicate check.
    pub(crate) fn append(&mut self, name: String, request: MarkRequest, noun1: NounId, noun2: NounId) -> MarkId {
        if self.len >= self.slots.len() {
            panic!("Ledger overflow: exceeded {} marks", self.slots.len());
        }

        let id = self.len;
        self.slots[id].update(name, request, noun1, noun2);
        self.len += 1;

        let mark = &self.slots[id];
        if mark.guess {
            self.num_guesses += 1;
        }
        if mark.verb == Verb::Is {
            self.num_pairs += 1;
        }
        id
    }

    /// Remove the last mark, returning its id. Popping an empty ledger is a no-op.
    ///
    /// The slot keeps its contents (with `valid == false`) so observers can
    /// still inspect what was removed.
    pub(crate) fn pop(&mut self) -> Option<MarkId> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let mark = &mut self.slots[self.len];
        mark.valid = false;
        if mark.verb == Verb::Is {
            self.num_pairs -= 1;
        }
        Some(self.len)
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    pub fn num_guesses(&self) -> usize {
        self.num_guesses
    }

    pub fn num_pairs(&self) -> usize {
        self.num_pairs
    }

    /// Live mark by id.
    pub fn get(&self, id: MarkId) -> Option<&Mark> {
        if id < self.len {
            Some(&self.slots[id])
        } else {
            None
        }
    }

    /// Any slot by id, live or tombstoned.
    pub fn slot(&self, id: MarkId) -> &Mark {
        &self.slots[id]
    }

    pub(crate) fn slot_mut(&mut self, id: MarkId) -> &mut Mark {
        &mut self.slots[id]
    }

    /// Live marks in entry order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Mark> {
        self.slots[..self.len].iter()
    }

    pub fn last(&self) -> Option<&Mark> {
        self.iter().next_back()
    }

    /// Most recent live mark of the given kind (backward scan from the tail).
    pub fn last_of_kind(&self, kind: MarkKind) -> Option<&Mark> {
        self.iter().rev().find(|mark| mark.kind == kind)
    }
}

impl Default for MarkLedger {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(kind: MarkKind, verb: Verb) -> MarkRequest {
        MarkRequest::new(kind, 1, NounId::new(0), verb, NounId::new(2))
    }

    #[test]
    fn test_ledger_new() {
        let ledger = MarkLedger::new(8);
        assert_eq!(ledger.len(), 0);
        assert_eq!(ledger.capacity(), 8);
        assert!(ledger.is_empty());
        assert!(ledger.last().is_none());
    }

    #[test]
    fn test_append_and_pop() {
        let mut ledger = MarkLedger::new(4);

        let a = ledger.append("a".into(), request(MarkKind::User, Verb::Is), NounId::new(0), NounId::new(2));
        let b = ledger.append("b".into(), request(MarkKind::Law, Verb::IsNot), NounId::new(0), NounId::new(3));
        assert_eq!((a, b), (0, 1));
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.num_pairs(), 1);

        assert_eq!(ledger.pop(), Some(1));
        assert_eq!(ledger.len(), 1);
        assert!(ledger.get(1).is_none());
        assert_eq!(ledger.slot(1).name, "b"); // Tombstone keeps contents

        assert_eq!(ledger.pop(), Some(0));
        assert_eq!(ledger.num_pairs(), 0);
        assert_eq!(ledger.pop(), None); // Underflow is a no-op
    }

    #[test]
    fn test_last_of_kind() {
        let mut ledger = MarkLedger::new(4);
        ledger.append("u".into(), request(MarkKind::User, Verb::Is), NounId::new(0), NounId::new(2));
        ledger.append("l".into(), request(MarkKind::Level, Verb::IsNot), NounId::new(0), NounId::new(3));
        ledger.append("r".into(), request(MarkKind::Rule, Verb::IsNot), NounId::new(1), NounId::new(2));

        assert_eq!(ledger.last().map(|m| m.num), Some(2));
        assert_eq!(ledger.last_of_kind(MarkKind::User).map(|m| m.num), Some(0));
        assert_eq!(ledger.last_of_kind(MarkKind::Level).map(|m| m.num), Some(1));
        assert!(ledger.last_of_kind(MarkKind::Law).is_none());
    }

    #[test]
    fn test_reset() {
        let mut ledger = MarkLedger::new(2);
        ledger.append("u".into(), request(MarkKind::User, Verb::Is), NounId::new(0), NounId::new(2));
        ledger.reset();
        assert!(ledger.is_empty());
        assert_eq!(ledger.num_pairs(), 0);
        assert!(ledger.slot(0).name.is_empty());
    }

    #[test]
    fn test_zero_capacity_reset() {
        let mut ledger = MarkLedger::default();
        ledger.reset();
        assert_eq!(ledger.capacity(), 0);
        assert!(ledger.is_full());
    }

    #[test]
    #[should_panic(expected = "Ledger overflow")]
    fn test_ledger_overflow() {
        let mut ledger = MarkLedger::new(2);

        // Try to exceed capacity
        for _ in 0..3 {
            ledger.append("m".into(), request(MarkKind::Level, Verb::IsNot), NounId::new(0), NounId::new(2));
        }
    }
}
