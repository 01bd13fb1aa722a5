// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Relation catalog: nouns, noun types, and the facts and rules a validator cites.
//!
//! The catalog is built once by a puzzle loader and is immutable afterwards.
//! The solving core only consumes it:
//! - NounType: a category with a stable 1-based number
//! - Noun: an entity with a 1-based number within its type
//! - Verb: Is / IsNot / Maybe
//!
//! Every noun type must hold the same number of nouns, so that the grid and
//! ledger capacities can be computed in closed form.

pub mod constants;
pub mod noun;
pub mod verb;

pub use constants::*;
pub use noun::{Noun, NounId, NounType};
pub use verb::Verb;

use std::collections::HashSet;
use thiserror::Error;

/// 1-based fact number.
pub type FactNum = usize;

/// 1-based rule number.
pub type RuleNum = usize;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("noun type {name:?} has no nouns")]
    EmptyNounType { name: String },
    #[error("noun type {name:?} has {actual} nouns, expected {expected}")]
    RaggedNounType {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[error("duplicate noun name {name:?}")]
    DuplicateNoun { name: String },
    #[error("a puzzle needs at least two noun types, got {count}")]
    TooFewNounTypes { count: usize },
}

/// Immutable puzzle catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    noun_types: Vec<NounType>,
    nouns: Vec<Noun>,
    nouns_per_type: usize,
    facts: Vec<String>,
    rules: Vec<String>,
}

impl Catalog {
    /// A catalog with no nouns. All derived capacities are zero.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nouns.is_empty()
    }

    pub fn num_noun_types(&self) -> usize {
        self.noun_types.len()
    }

    /// Number of nouns in every noun type.
    pub fn nouns_per_type(&self) -> usize {
        self.nouns_per_type
    }

    /// Number of grids, one per unordered pair of noun types.
    pub fn max_grids(&self) -> usize {
        grid_count(self.noun_types.len())
    }

    /// Number of positive marks in a complete solution.
    pub fn max_pairs(&self) -> usize {
        self.max_grids() * self.nouns_per_type
    }

    /// Number of marks in a complete solution; also the ledger capacity.
    pub fn max_marks(&self) -> usize {
        self.max_pairs() * self.nouns_per_type
    }

    pub fn noun_types(&self) -> &[NounType] {
        &self.noun_types
    }

    /// Noun type by 1-based number.
    pub fn noun_type(&self, num: usize) -> &NounType {
        &self.noun_types[num - 1]
    }

    pub fn nouns(&self) -> &[Noun] {
        &self.nouns
    }

    pub fn noun(&self, id: NounId) -> &Noun {
        &self.nouns[id.as_usize()]
    }

    /// Nouns of the given 1-based type number.
    pub fn nouns_of(&self, type_num: usize) -> &[NounId] {
        &self.noun_type(type_num).nouns
    }

    pub fn find_noun(&self, name: &str) -> Option<NounId> {
        self.nouns.iter().find(|n| n.name == name).map(|n| n.id)
    }

    pub fn fact_count(&self) -> usize {
        self.facts.len()
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Text of a 1-based fact number.
    pub fn fact(&self, num: FactNum) -> &str {
        &self.facts[num - 1]
    }

    /// Text of a 1-based rule number.
    pub fn rule(&self, num: RuleNum) -> &str {
        &self.rules[num - 1]
    }
}

/// Builder used by puzzle loaders and tests.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    noun_types: Vec<(String, Vec<String>)>,
    facts: Vec<String>,
    rules: Vec<String>,
}

impl CatalogBuilder {
    pub fn noun_type(mut self, name: &str, nouns: &[&str]) -> Self {
        let nouns = nouns.iter().map(|n| n.to_string()).collect();
        self.noun_types.push((name.to_string(), nouns));
        self
    }

    pub fn fact(mut self, text: &str) -> Self {
        self.facts.push(text.to_string());
        self
    }

    pub fn rule(mut self, text: &str) -> Self {
        self.rules.push(text.to_string());
        self
    }

    pub fn build(self) -> Result<Catalog, CatalogError> {
        if self.noun_types.len() < 2 {
            return Err(CatalogError::TooFewNounTypes {
                count: self.noun_types.len(),
            });
        }

        let expected = self.noun_types[0].1.len();
        let mut seen = HashSet::new();
        let mut noun_types = Vec::with_capacity(self.noun_types.len());
        let mut nouns = Vec::with_capacity(expected * self.noun_types.len());

        for (t, (type_name, names)) in self.noun_types.into_iter().enumerate() {
            if names.is_empty() {
                return Err(CatalogError::EmptyNounType { name: type_name });
            }
            if names.len() != expected {
                return Err(CatalogError::RaggedNounType {
                    name: type_name,
                    expected,
                    actual: names.len(),
                });
            }

            let mut ids = Vec::with_capacity(names.len());
            for (n, name) in names.into_iter().enumerate() {
                if !seen.insert(name.clone()) {
                    return Err(CatalogError::DuplicateNoun { name });
                }
                let id = NounId::new(nouns.len());
                nouns.push(Noun {
                    id,
                    type_num: t + 1,
                    num: n + 1,
                    name,
                });
                ids.push(id);
            }

            noun_types.push(NounType {
                num: t + 1,
                name: type_name,
                nouns: ids,
            });
        }

        Ok(Catalog {
            noun_types,
            nouns,
            nouns_per_type: expected,
            facts: self.facts,
            rules: self.rules,
        })
    }
}
