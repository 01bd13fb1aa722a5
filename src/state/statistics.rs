// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Two parallel tables indexed by search level, plus one aggregate row:
//! one counts every mark, the other counts only positive (`Is`) marks.
//! Each row breaks its count down by provenance.

use crate::catalog::{MAX_LAWS, MAX_LEVELS};
use crate::ledger::{Mark, MarkKind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("mark {mark} has level {level} (max {max})", max = MAX_LEVELS)]
    LevelOutOfRange { mark: usize, level: usize },
    #[error("mark {mark} cites law {law} (max {max})", max = MAX_LAWS)]
    LawOutOfRange { mark: usize, law: usize },
}

/// Counts for one level (or the total row).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelCounter {
    /// Marks entered by a level method or by the user.
    pub marks_by_level: i64,
    /// Marks entered by a rule trigger.
    pub marks_by_rule: i64,
    /// Marks entered by each law, indexed by law number - 1.
    pub marks_by_law: [i64; MAX_LAWS],
    pub sum: i64,
}

impl LevelCounter {
    fn add(&mut self, kind: MarkKind, law: usize, d: i64) {
        self.sum += d;
        match kind {
            MarkKind::Level | MarkKind::User => self.marks_by_level += d,
            MarkKind::Rule => self.marks_by_rule += d,
            MarkKind::Law => self.marks_by_law[law - 1] += d,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Counts in column order: level, rule, each law, sum.
    pub fn counts(&self) -> Vec<i64> {
        let mut counts = Vec::with_capacity(MAX_LAWS + 3);
        counts.push(self.marks_by_level);
        counts.push(self.marks_by_rule);
        counts.extend_from_slice(&self.marks_by_law);
        counts.push(self.sum);
        counts
    }

    pub fn column_headers() -> Vec<String> {
        let mut headers = vec![String::from("#"), String::from("Level"), String::from("Rule")];
        headers.extend((1..=MAX_LAWS).map(|j| format!("Law {j}")));
        headers.push(String::from("Sum"));
        headers
    }

    pub fn row_headers() -> Vec<String> {
        let mut headers = vec![String::from("#")];
        headers.extend((1..=MAX_LEVELS).map(|j| j.to_string()));
        headers.push(String::from("Sum"));
        headers
    }
}

#[derive(Debug, Clone)]
pub struct Stats {
    /// Rows 0..MAX_LEVELS are levels 1..=MAX_LEVELS; the last row is the total.
    level_marks: Vec<LevelCounter>,
    level_pairs: Vec<LevelCounter>,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            level_marks: vec![LevelCounter::default(); MAX_LEVELS + 1],
            level_pairs: vec![LevelCounter::default(); MAX_LEVELS + 1],
        }
    }

    pub fn reset(&mut self) {
        self.level_marks.iter_mut().for_each(LevelCounter::reset);
        self.level_pairs.iter_mut().for_each(LevelCounter::reset);
    }

    /// Count a mark that was appended (`d = 1`) or removed (`d = -1`).
    ///
    /// Marks with level 0 are ignored. A level above MAX_LEVELS, or a law mark
    /// citing an unknown law, is an internal-consistency error and leaves the
    /// tables untouched.
    pub fn update(&mut self, mark: &Mark, d: i64) -> Result<(), StatsError> {
        let level = mark.level;
        if level < 1 {
            return Ok(());
        }
        if level > MAX_LEVELS {
            return Err(StatsError::LevelOutOfRange { mark: mark.num, level });
        }
        if mark.kind == MarkKind::Law && !(1..=MAX_LAWS).contains(&mark.ref_num) {
            return Err(StatsError::LawOutOfRange { mark: mark.num, law: mark.ref_num });
        }

        let total = MAX_LEVELS;
        self.level_marks[level - 1].add(mark.kind, mark.ref_num, d);
        self.level_marks[total].add(mark.kind, mark.ref_num, d);
        if mark.verb.is_positive() {
            self.level_pairs[level - 1].add(mark.kind, mark.ref_num, d);
            self.level_pairs[total].add(mark.kind, mark.ref_num, d);
        }
        Ok(())
    }

    /// Mark counts for a 1-based level.
    pub fn marks(&self, level: usize) -> &LevelCounter {
        &self.level_marks[level - 1]
    }

    /// Positive-mark counts for a 1-based level.
    pub fn pairs(&self, level: usize) -> &LevelCounter {
        &self.level_pairs[level - 1]
    }

    pub fn total_marks(&self) -> &LevelCounter {
        &self.level_marks[MAX_LEVELS]
    }

    pub fn total_pairs(&self) -> &LevelCounter {
        &self.level_pairs[MAX_LEVELS]
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}
