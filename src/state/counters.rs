// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fact and rule hit counters.
//!
//! A fact or rule's hit count grows every time it participates in a mark or
//! a violation. The "touched" totals grow only the first time a given fact
//! or rule is hit. Hits are never decremented when marks are undone.

use crate::catalog::{FactNum, RuleNum};

#[derive(Debug, Default, Clone)]
pub struct HitCounters {
    fact_hits: Vec<u32>,
    rule_hits: Vec<u32>,
    facts_touched: usize,
    fact_hits_total: usize,
    rules_touched: usize,
    rule_hits_total: usize,
}

impl HitCounters {
    pub fn new(fact_count: usize, rule_count: usize) -> Self {
        Self {
            fact_hits: vec![0; fact_count],
            rule_hits: vec![0; rule_count],
            ..Self::default()
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.fact_hits.len(), self.rule_hits.len());
    }

    /// # Panics
    ///
    /// Panics if `fact` is not a 1-based fact number of the catalog.
    pub fn hit_fact(&mut self, fact: FactNum) {
        assert!(fact >= 1 && fact <= self.fact_hits.len(), "Fact out of range: {}", fact);
        let hits = &mut self.fact_hits[fact - 1];
        *hits += 1;
        if *hits == 1 {
            self.facts_touched += 1;
        }
        self.fact_hits_total += 1;
    }

    /// # Panics
    ///
    /// Panics if `rule` is not a 1-based rule number of the catalog.
    pub fn hit_rule(&mut self, rule: RuleNum) {
        assert!(rule >= 1 && rule <= self.rule_hits.len(), "Rule out of range: {}", rule);
        let hits = &mut self.rule_hits[rule - 1];
        *hits += 1;
        if *hits == 1 {
            self.rules_touched += 1;
        }
        self.rule_hits_total += 1;
    }

    pub fn fact_hits(&self, fact: FactNum) -> u32 {
        self.fact_hits[fact - 1]
    }

    pub fn rule_hits(&self, rule: RuleNum) -> u32 {
        self.rule_hits[rule - 1]
    }

    /// Number of distinct facts hit at least once.
    pub fn facts_touched(&self) -> usize {
        self.facts_touched
    }

    pub fn fact_hits_total(&self) -> usize {
        self.fact_hits_total
    }

    /// Number of distinct rules hit at least once.
    pub fn rules_touched(&self) -> usize {
        self.rules_touched
    }

    pub fn rule_hits_total(&self) -> usize {
        self.rule_hits_total
    }
}
