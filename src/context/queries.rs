// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Read-only relation queries used by finders and lawyers.
//!
//! All queries take noun ids and answer from the grid and pairing index in
//! O(1) per noun pair. `nouns_compatible_with` is the one predicate all
//! constraint propagation should build on.

use super::SolverContext;
use crate::catalog::{NounId, Verb};
use crate::grid::Link;
use crate::ledger::{Mark, MarkKind};

impl SolverContext {
    /// Verb recorded between two nouns; same-type nouns yield `IsNot`.
    pub fn grid_verb(&self, noun1: NounId, noun2: NounId) -> Verb {
        self.grid.lookup(self.catalog.noun(noun1), self.catalog.noun(noun2))
    }

    /// Whether exactly this relation is already recorded.
    pub fn is_mark(&self, noun1: NounId, verb: Verb, noun2: NounId) -> bool {
        self.grid
            .get(self.catalog.noun(noun1), self.catalog.noun(noun2))
            .is_some_and(|entry| entry.verb == verb)
    }

    /// The noun of type `type_num` that `noun` is paired with, if any.
    pub fn partner(&self, noun: NounId, type_num: usize) -> Option<NounId> {
        self.pairing.partner(self.catalog.noun(noun), type_num)
    }

    /// Whether two nouns could still be the same entity.
    ///
    /// False if `IsNot` is recorded between them, or if either is already
    /// paired with a different noun of the other's type.
    pub fn nouns_compatible_with(&self, noun1: NounId, noun2: NounId) -> bool {
        let (a, b) = (self.catalog.noun(noun1), self.catalog.noun(noun2));
        if self.grid.get(a, b).is_some_and(|entry| entry.verb == Verb::IsNot) {
            return false;
        }
        if self.pairing.partner(a, b.type_num).is_some_and(|p| p != b.id) {
            return false;
        }
        if self.pairing.partner(b, a.type_num).is_some_and(|p| p != a.id) {
            return false;
        }
        true
    }

    /// Nouns of type `type_num` with no mark against `noun1` yet.
    ///
    /// The iterator is lazy; call again to restart it.
    pub fn candidate_nouns(&self, noun1: NounId, type_num: usize) -> impl Iterator<Item = NounId> + Clone + '_ {
        let a = self.catalog.noun(noun1);
        self.catalog
            .nouns_of(type_num)
            .iter()
            .copied()
            .filter(move |&id| self.grid.get(a, self.catalog.noun(id)).is_none())
    }

    /// Whether `IsNot` is recorded between `noun2` and every noun in `nouns`.
    pub fn cannot_be_with(&self, nouns: &[NounId], noun2: NounId) -> bool {
        nouns.iter().all(|&noun1| self.grid_verb(noun1, noun2) == Verb::IsNot)
    }

    /// First noun of type `type3` both nouns could still be with.
    pub fn common_noun(&self, noun1: NounId, noun2: NounId, type3: usize) -> Option<NounId> {
        self.catalog
            .nouns_of(type3)
            .iter()
            .copied()
            .find(|&noun3| self.nouns_compatible_with(noun1, noun3) && self.nouns_compatible_with(noun2, noun3))
    }

    /// Whether the slots of two nouns could still be linked by `link`.
    ///
    /// A noun's slot is its partner in the link's noun type if it has one;
    /// otherwise any slot not yet marked against it is considered.
    pub fn maybe_related(&self, noun1: NounId, link: &dyn Link, noun2: NounId) -> bool {
        let slot_type = link.noun_type();
        let open = |noun: NounId| -> Vec<NounId> {
            match self.partner(noun, slot_type) {
                Some(slot) => vec![slot],
                None => self
                    .catalog
                    .nouns_of(slot_type)
                    .iter()
                    .copied()
                    .filter(|&slot| self.grid_verb(slot, noun) == Verb::Maybe)
                    .collect(),
            }
        };

        let (slots1, slots2) = (open(noun1), open(noun2));
        slots1
            .iter()
            .any(|&a| slots2.iter().any(|&b| link.verb(a, b) == Verb::Is))
    }

    /// Whether `noun1` could be in a slot that `link` relates to `slot2`.
    ///
    /// With `i == 1` the link is read from `slot2` to the candidate slot,
    /// otherwise from the candidate slot to `slot2`.
    pub fn can_be_linked(&self, noun1: NounId, link: &dyn Link, slot2: NounId, i: usize) -> bool {
        self.catalog.nouns_of(link.noun_type()).iter().any(|&slot1| {
            let verb = if i != 1 { link.verb(slot1, slot2) } else { link.verb(slot2, slot1) };
            verb == Verb::Is && self.nouns_compatible_with(slot1, noun1)
        })
    }

    /// The most recent user mark, or None while a job is running.
    pub fn last_user_mark(&self) -> Option<&Mark> {
        if self.control.is_working() {
            return None;
        }
        self.ledger.last_of_kind(MarkKind::User)
    }
}
