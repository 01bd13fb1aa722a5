// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mark insertion.
//!
//! A proposed mark goes through these steps:
//! 1. Canonicalize: the noun with the lower type number comes first
//! 2. Duplicate check: same verb is a no-op, a different verb is rejected
//! 3. Record: ledger, grid, pairing index, hit counters, statistics
//! 4. Propagate: every non-user mark is validated by the lawyer before returning
//! 5. Solution check: once every cell holds a confirmed mark

use super::{MarkError, MarkStatus, SolverContext};
use crate::catalog::{NounId, RuleNum, Verb, MAX_LEVELS};
use crate::engine::{Lawyer, SolverEvent};
use crate::grid::GridEntry;
use crate::ledger::{MarkId, MarkKind, MarkRequest};
use std::sync::Arc;
use tracing::{debug, info, warn};

impl SolverContext {
    /// Propose a mark on behalf of a finder or lawyer.
    ///
    /// Returns `Ok(Skipped)` without effect once a stop was requested.
    ///
    /// # Panics
    ///
    /// Panics if both nouns have the same type, or if the ledger is full.
    /// Either means the caller is defective.
    pub fn add_mark(&mut self, lawyer: &mut dyn Lawyer, request: MarkRequest) -> Result<MarkStatus, MarkError> {
        let id = match self.record(request)? {
            MarkStatus::Entered(id) => id,
            status => return Ok(status),
        };

        if self.ledger.slot(id).kind != MarkKind::User {
            lawyer.validate(self, id)?;
        }
        self.check_solution(id);
        Ok(MarkStatus::Entered(id))
    }

    /// Enter a mark on behalf of the operator.
    ///
    /// User marks are filed at the deepest level and are not validated here;
    /// the coordinator validates them in a separate job.
    pub fn add_mark_by_user(&mut self, noun1: NounId, verb: Verb, noun2: NounId) -> Result<MarkStatus, MarkError> {
        self.record(MarkRequest::new(MarkKind::User, MAX_LEVELS, noun1, verb, noun2))
    }

    /// Enter a mark forced by rule `rule` while validating mark `trigger`.
    ///
    /// A no-op success if triggers are disabled or the mark already exists.
    #[allow(clippy::too_many_arguments)]
    pub fn add_mark_by_rule(
        &mut self,
        lawyer: &mut dyn Lawyer,
        trigger: MarkId,
        rule: RuleNum,
        ref_sub: char,
        noun1: NounId,
        verb: Verb,
        noun2: NounId,
        msg: &str,
    ) -> Result<MarkStatus, MarkError> {
        if !self.config.triggers_enabled() || self.is_mark(noun1, verb, noun2) {
            return Ok(MarkStatus::Skipped);
        }

        let (level, level_sub) = {
            let mark = self.ledger.slot(trigger);
            (mark.level, mark.level_sub)
        };
        let request = MarkRequest::new(MarkKind::Rule, level, noun1, verb, noun2)
            .level_sub(level_sub)
            .reference(rule, ref_sub)
            .triggered_by(trigger);
        let reason = format!("Rule {} on mark {}, {}", request.reference_label(), trigger, msg);
        self.add_mark(lawyer, request.reason(reason))
    }

    /// Declare a solution if every mark is confirmed. A solution found above
    /// the guessing level also stops the search.
    pub fn check_solution(&mut self, mark: MarkId) {
        if !self.is_solved() {
            return;
        }
        self.say_solution();
        if self.ledger.slot(mark).level < MAX_LEVELS {
            self.control.raise_stop();
        }
    }

    /// Steps 1 through 3.
    fn record(&mut self, request: MarkRequest) -> Result<MarkStatus, MarkError> {
        if self.control.stop_requested() {
            return Ok(MarkStatus::Skipped);
        }
        if self.started_at.is_none() {
            self.start_clock();
        }

        let catalog = Arc::clone(&self.catalog);
        let (a, b) = (catalog.noun(request.noun_a), catalog.noun(request.noun_b));
        if a.same_type(b) {
            panic!("Same-type nouns: {} and {} are both of type {}", a, b, a.type_num);
        }
        let (noun1, noun2) = if a.type_num < b.type_num { (a, b) } else { (b, a) };

        if let Some(old) = self.grid.get(noun1, noun2) {
            if old.verb == request.verb {
                return Ok(MarkStatus::AlreadyPresent(old.mark));
            }
            if request.kind == MarkKind::Rule {
                debug!(rule = %request.reference_label(), existing = old.mark, "rule conflicts with existing mark");
                return Err(MarkError::RuleConflict { existing: old.mark });
            }
            let source = match request.kind {
                MarkKind::User => format!("The {}", request.kind.name()),
                kind => format!("{} {}", kind.name(), request.reference_label()),
            };
            let mut message = format!("{} requests a mark that would contradict mark {}!", source, old.mark);
            if !request.reason.is_empty() {
                message.push('\n');
                message.push_str(&request.reason);
            }
            warn!(existing = old.mark, "{}", message);
            self.announce(SolverEvent::Contradiction { message, existing: old.mark });
            return Err(MarkError::Contradiction { existing: old.mark });
        }

        let whom = if request.kind == MarkKind::User { "You" } else { "I" };
        let what = if request.kind == MarkKind::Level && request.level == MAX_LEVELS {
            "assumed"
        } else {
            "entered"
        };
        let mut name = format!("{} {} '{}' for {} and {}.", whom, what, request.verb.code(), noun1, noun2);
        if !request.reason.is_empty() {
            name.push('\n');
            name.push_str(&request.reason);
        }

        let verb = request.verb;
        let id = self.ledger.append(name.clone(), request, noun1.id, noun2.id);
        self.grid.set(noun1, noun2, GridEntry { mark: id, verb });
        if verb == Verb::Is {
            self.pairing.pair(noun1, noun2);
        }

        let mark = self.ledger.slot(id);
        for &fact in &mark.facts {
            self.hits.hit_fact(fact);
        }
        if mark.kind == MarkKind::Rule {
            self.hits.hit_rule(mark.ref_num);
        }
        if mark.guess {
            info!(mark = id, "{}", name);
        } else {
            debug!(mark = id, "{}", name);
        }

        self.record_stats(id, 1);
        self.announce(SolverEvent::MarkAdded { message: name, mark: id });
        Ok(MarkStatus::Entered(id))
    }
}
