// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Notifications and the reporting hooks used by lawyers.
//!
//! Every announcement goes to the viewer first and is then a pause point.

use super::{MarkError, SolverContext};
use crate::catalog::{FactNum, NounId, RuleNum, MAX_LEVELS};
use crate::engine::SolverEvent;
use crate::ledger::{MarkId, Placer};
use std::sync::Arc;
use tracing::{info, warn};

impl SolverContext {
    /// Notify the viewer, then suspend if the pause table says so.
    pub(crate) fn announce(&mut self, event: SolverEvent) {
        let viewer = Arc::clone(&self.viewer);
        viewer.notify(self, &event);

        if !self.control.is_working() {
            return;
        }
        let next = self.control.gate().pause_requested();
        let mark = event.mark().map(|id| self.ledger.slot(id));
        let wanted = self.config.pauses_on(&event, mark, next);
        self.control.pause_point(wanted);
    }

    pub fn say_started(&mut self, message: Option<String>) {
        self.announce(SolverEvent::Started { message });
    }

    pub fn say_stopped(&mut self, message: Option<String>) {
        self.announce(SolverEvent::Stopped { message });
    }

    /// Announce that the finder moved to another level.
    pub fn say_level(&mut self, message: impl Into<String>) {
        self.announce(SolverEvent::LevelChanged { message: message.into() });
    }

    pub(crate) fn say_solution(&mut self) {
        self.num_solutions += 1;
        let count = self.num_solutions;
        let what = if count == 1 {
            String::from("a solution")
        } else {
            format!("{count} solutions")
        };
        let message = format!("I have {} at {} in {} ms.", what, self.clock_stamp(), self.elapsed_ms());
        info!(count, "{}", message);
        self.announce(SolverEvent::SolutionFound { message, count });
    }

    /// Record that the lawyer validated a mark. Only the first confirmation counts.
    pub fn confirm_mark(&mut self, mark: MarkId) {
        let slot = self.ledger.slot_mut(mark);
        if slot.valid {
            return;
        }
        slot.valid = true;
        self.num_valid += 1;
        let message = format!("I validated mark {}.", mark);
        self.announce(SolverEvent::MarkValidated { message, mark });
    }

    /// Report that a mark violates a fact. Below the guessing level the
    /// violation is unrecoverable and stops the search.
    pub fn report_fact_violation(&mut self, mark: MarkId, fact: FactNum) -> MarkError {
        self.hits.hit_fact(fact);
        let catalog = Arc::clone(&self.catalog);
        let m = self.ledger.slot(mark);
        let level = m.level;
        let message = format!(
            "{}\nMark {} violates fact {}!\n{}",
            m.name,
            mark,
            fact,
            catalog.fact(fact)
        );
        warn!(mark, fact, "fact violation");
        self.announce(SolverEvent::FactViolation { message, mark, fact });

        if level < MAX_LEVELS {
            self.control.raise_stop();
        }
        MarkError::FactViolation { mark, fact }
    }

    pub fn report_rule_violation(&mut self, mark: MarkId, rule: RuleNum) -> MarkError {
        self.hits.hit_rule(rule);
        let message = format!("Mark {} violates rule {}!", mark, rule);
        warn!(mark, rule, "rule violation");
        self.announce(SolverEvent::RuleViolation { message, mark, rule });
        MarkError::RuleViolation { mark, rule }
    }

    pub fn report_law_violation(&mut self, mark: MarkId, message: impl Into<String>) -> MarkError {
        let message = message.into();
        warn!(mark, "{}", message);
        self.announce(SolverEvent::LawViolation { message: message.clone(), mark });
        MarkError::LawViolation { mark, message }
    }

    /// Disable a fact on behalf of a mark; it is enabled again when the mark is removed.
    pub fn disable_fact(&mut self, mark: MarkId, fact: FactNum) {
        if !self.fact_enabled[fact - 1] {
            return;
        }
        self.fact_enabled[fact - 1] = false;
        self.ledger.slot_mut(mark).disabled_facts.push(fact);
    }

    pub fn add_placer(&mut self, mark: MarkId, rule: RuleNum, noun: NounId, text: impl Into<String>) {
        self.ledger.slot_mut(mark).placers.push(Placer { rule, noun, text: text.into() });
    }

    /// Announce the placers rule `rule` attached to a mark.
    pub fn announce_placers(&mut self, mark: MarkId, rule: RuleNum) {
        self.hits.hit_rule(rule);
        let message = self.ledger.slot(mark).rule_placers_message(rule);
        self.announce(SolverEvent::PlacersUpdated { message, mark, rule });
    }
}
