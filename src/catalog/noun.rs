// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Nouns and noun types.
//!
//! Nouns live in a single arena owned by the [`Catalog`](super::Catalog) and
//! are addressed by [`NounId`]. Relations between nouns are never stored as
//! references; the grid and pairing index hold ids only.

use std::fmt;

/// Index of a noun in the catalog arena.
///
/// This is a newtype wrapper to provide type safety and prevent mixing
/// noun ids with type numbers or 1-based noun numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NounId(u32);

impl NounId {
    pub fn new(value: usize) -> Self {
        Self(value as u32)
    }

    /// Get the noun id as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NounId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A category of nouns, e.g. "Color" or "Pet".
#[derive(Debug, Clone)]
pub struct NounType {
    /// Stable 1-based sequence number among all noun types.
    pub num: usize,
    pub name: String,
    /// Nouns of this type, in 1-based noun-number order.
    pub nouns: Vec<NounId>,
}

/// An entity belonging to exactly one noun type.
#[derive(Debug, Clone)]
pub struct Noun {
    pub id: NounId,
    /// 1-based number of the owning noun type.
    pub type_num: usize,
    /// 1-based sequence number within the owning type.
    pub num: usize,
    pub name: String,
}

impl Noun {
    /// Two nouns of the same type are never compared for a relation.
    pub fn same_type(&self, other: &Noun) -> bool {
        self.type_num == other.type_num
    }
}

impl fmt::Display for Noun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
