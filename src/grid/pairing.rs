// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-noun pointer to its positively related partner in every other type.

use crate::catalog::{Noun, NounId};

/// Pairing index.
///
/// Slot `(noun, t)` holds the noun of type `t` that `noun` is positively
/// related to. The index is kept symmetric: pairing A with B fills both
/// A's slot for B's type and B's slot for A's type.
#[derive(Debug, Default)]
pub struct PairingIndex {
    num_types: usize,
    slots: Vec<Option<NounId>>,
}

impl PairingIndex {
    pub fn new(num_nouns: usize, num_types: usize) -> Self {
        Self {
            num_types,
            slots: vec![None; num_nouns * num_types],
        }
    }

    #[inline]
    fn slot(&self, noun: NounId, type_num: usize) -> usize {
        noun.as_usize() * self.num_types + (type_num - 1)
    }

    /// The noun of `type_num` that `noun` is paired with, if any.
    pub fn partner(&self, noun: &Noun, type_num: usize) -> Option<NounId> {
        self.slots[self.slot(noun.id, type_num)]
    }

    pub(crate) fn pair(&mut self, a: &Noun, b: &Noun) {
        let (sa, sb) = (self.slot(a.id, b.type_num), self.slot(b.id, a.type_num));
        self.slots[sa] = Some(b.id);
        self.slots[sb] = Some(a.id);
    }

    pub(crate) fn unpair(&mut self, a: &Noun, b: &Noun) {
        let (sa, sb) = (self.slot(a.id, b.type_num), self.slot(b.id, a.type_num));
        self.slots[sa] = None;
        self.slots[sb] = None;
    }

    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// Number of filled slots (twice the number of pairs).
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
