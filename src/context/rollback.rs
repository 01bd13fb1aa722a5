// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! LIFO removal of marks.
//!
//! Each pop reverses exactly what recording the mark did: grid cell,
//! pairing slots, facts it disabled, statistics. Hit counters are not
//! reversed.

use super::SolverContext;
use crate::catalog::Verb;
use crate::engine::SolverEvent;
use crate::ledger::{MarkId, MarkKind};
use std::sync::Arc;
use tracing::debug;

impl SolverContext {
    /// Remove the last mark. Returns None if the ledger is empty.
    ///
    /// Callers outside the crate undo through the checkpoint methods, which
    /// keep the validated count within the ledger length.
    pub(crate) fn remove_last_mark(&mut self) -> Option<MarkId> {
        let id = self.ledger.last()?.num;

        let catalog = Arc::clone(&self.catalog);
        let mark = self.ledger.slot(id);
        let (noun1, noun2) = (catalog.noun(mark.noun1), catalog.noun(mark.noun2));
        self.grid.clear(noun1, noun2);
        if mark.verb == Verb::Is {
            self.pairing.unpair(noun1, noun2);
        }
        for &fact in &mark.disabled_facts {
            self.fact_enabled[fact - 1] = true;
        }

        self.ledger.pop();
        self.record_stats(id, -1);

        let mark = self.ledger.slot(id);
        let mut message = format!("I removed mark {}.", id);
        if mark.has_placers() {
            message.push('\n');
            message.push_str(&mark.reset_placers_message());
        }
        debug!(mark = id, "{}", message);
        self.announce(SolverEvent::MarkRemoved { message, mark: id });

        // Placers are cleared only after observers saw them being reset
        self.ledger.slot_mut(id).retire();
        Some(id)
    }

    /// Abandon the current assumption: remove marks back to and including
    /// the last level mark.
    pub fn undo_to_last_level_mark(&mut self) {
        self.undo_through(MarkKind::Level);
    }

    /// Retract the operator's last input: remove marks back to and including
    /// the last user mark. Stops early if a stop is requested.
    pub fn undo_to_last_user_mark(&mut self) {
        self.undo_through(MarkKind::User);
    }

    fn undo_through(&mut self, kind: MarkKind) {
        while !self.ledger.is_empty() {
            if self.control.stop_requested() {
                break;
            }
            match self.remove_last_mark() {
                Some(id) if self.ledger.slot(id).kind == kind => break,
                Some(_) => {}
                None => break,
            }
        }

        if self.num_valid > self.ledger.len() {
            self.num_valid = self.ledger.len();
        }
    }
}
