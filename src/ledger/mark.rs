// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Marks: the unit of recorded knowledge.

use crate::catalog::{FactNum, NounId, RuleNum, Verb, MAX_LEVELS};
use strum_macros::IntoStaticStr;

/// Position of a mark in the ledger. Immutable once assigned.
pub type MarkId = usize;

/// Provenance of a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
pub enum MarkKind {
    /// Entered manually by an operator.
    User,
    /// Entered by a search level, either a deduction or a guess.
    Level,
    /// Forced by a rule triggered on another mark.
    Rule,
    /// Forced by a law while validating another mark.
    Law,
}

impl MarkKind {
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// A rule's annotation that it renamed or placed a noun while validating a mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placer {
    pub rule: RuleNum,
    pub noun: NounId,
    pub text: String,
}

/// Everything a collaborator supplies when proposing a mark.
///
/// The nouns may be given in either order; the ledger stores them canonically.
#[derive(Debug, Clone)]
pub struct MarkRequest {
    pub reason: String,
    pub level: usize,
    pub level_sub: char,
    pub kind: MarkKind,
    pub ref_num: usize,
    pub ref_sub: char,
    pub noun_a: NounId,
    pub verb: Verb,
    pub noun_b: NounId,
    pub facts: Vec<FactNum>,
    pub loner: Option<usize>,
    pub triggered_by: Option<MarkId>,
}

impl MarkRequest {
    pub fn new(kind: MarkKind, level: usize, noun_a: NounId, verb: Verb, noun_b: NounId) -> Self {
        Self {
            reason: String::new(),
            level,
            level_sub: ' ',
            kind,
            ref_num: level,
            ref_sub: ' ',
            noun_a,
            verb,
            noun_b,
            facts: Vec::new(),
            loner: None,
            triggered_by: None,
        }
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn level_sub(mut self, level_sub: char) -> Self {
        self.level_sub = level_sub;
        self
    }

    /// Which rule, law or level produced the mark.
    pub fn reference(mut self, ref_num: usize, ref_sub: char) -> Self {
        self.ref_num = ref_num;
        self.ref_sub = ref_sub;
        self
    }

    pub fn facts(mut self, facts: Vec<FactNum>) -> Self {
        self.facts = facts;
        self
    }

    pub fn loner(mut self, loner: usize) -> Self {
        self.loner = Some(loner);
        self
    }

    pub fn triggered_by(mut self, mark: MarkId) -> Self {
        self.triggered_by = Some(mark);
        self
    }

    /// "12" or "12a" style reference label.
    pub fn reference_label(&self) -> String {
        reference_label(self.ref_num, self.ref_sub)
    }
}

pub(crate) fn reference_label(num: usize, sub: char) -> String {
    if sub == ' ' {
        num.to_string()
    } else {
        format!("{num}{sub}")
    }
}

/// One pre-allocated ledger slot.
///
/// Slots are allocated once per puzzle and reused: `update` populates a slot
/// when the ledger grows, `retire` tombstones it when the ledger shrinks.
#[derive(Debug, Clone)]
pub struct Mark {
    pub num: MarkId,
    /// Human-readable justification.
    pub name: String,
    pub level: usize,
    pub level_sub: char,
    pub kind: MarkKind,
    pub ref_num: usize,
    pub ref_sub: char,
    /// Noun with the lower type number.
    pub noun1: NounId,
    pub verb: Verb,
    /// Noun with the higher type number.
    pub noun2: NounId,
    pub facts: Vec<FactNum>,
    pub loner: Option<usize>,
    pub triggered_by: Option<MarkId>,
    pub guess: bool,
    pub valid: bool,
    /// Facts the validator disabled on behalf of this mark.
    pub disabled_facts: Vec<FactNum>,
    pub placers: Vec<Placer>,
}

impl Mark {
    pub fn empty(num: MarkId) -> Self {
        Self {
            num,
            name: String::new(),
            level: 0,
            level_sub: ' ',
            kind: MarkKind::User,
            ref_num: 0,
            ref_sub: ' ',
            noun1: NounId::new(0),
            verb: Verb::Maybe,
            noun2: NounId::new(0),
            facts: Vec::new(),
            loner: None,
            triggered_by: None,
            guess: false,
            valid: false,
            disabled_facts: Vec::new(),
            placers: Vec::new(),
        }
    }

    /// Populate this slot from a request whose nouns are already canonical.
    pub(crate) fn update(&mut self, name: String, request: MarkRequest, noun1: NounId, noun2: NounId) {
        self.name = name;
        self.level = request.level;
        self.level_sub = request.level_sub;
        self.kind = request.kind;
        self.ref_num = request.ref_num;
        self.ref_sub = request.ref_sub;
        self.noun1 = noun1;
        self.verb = request.verb;
        self.noun2 = noun2;
        self.facts = request.facts;
        self.loner = request.loner;
        self.triggered_by = request.triggered_by;
        self.guess = request.kind == MarkKind::Level && request.level == MAX_LEVELS;
        self.valid = false;
        self.disabled_facts.clear();
        self.placers.clear();
    }

    /// Clear justification, back-reference and annotations of a removed mark.
    pub(crate) fn retire(&mut self) {
        self.valid = false;
        self.facts.clear();
        self.triggered_by = None;
        self.disabled_facts.clear();
        self.placers.clear();
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::empty(self.num);
    }

    pub fn has_placers(&self) -> bool {
        !self.placers.is_empty()
    }

    pub fn reference_label(&self) -> String {
        reference_label(self.ref_num, self.ref_sub)
    }

    /// Message listing the placers of one rule on this mark.
    pub fn rule_placers_message(&self, rule: RuleNum) -> String {
        let texts: Vec<&str> = self
            .placers
            .iter()
            .filter(|p| p.rule == rule)
            .map(|p| p.text.as_str())
            .collect();
        format!("Rule {} on mark {} placed {}.", rule, self.num, texts.join(", "))
    }

    /// Message listing every placer that is undone with this mark.
    pub fn reset_placers_message(&self) -> String {
        let texts: Vec<&str> = self.placers.iter().map(|p| p.text.as_str()).collect();
        format!("Reset placers {}.", texts.join(", "))
    }
}
