// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Observer notifications.
//!
//! Every state change the worker makes is announced, in order, to a
//! [`Viewer`]. The viewer gets a shared view of the context at the moment
//! of the announcement, so it can inspect the ledger and grid without
//! racing the worker.

use crate::catalog::{FactNum, RuleNum};
use crate::context::SolverContext;
use crate::ledger::MarkId;
use strum_macros::IntoStaticStr;

#[derive(Debug, Clone, PartialEq, Eq, IntoStaticStr)]
pub enum SolverEvent {
    Started { message: Option<String> },
    Stopped { message: Option<String> },
    LevelChanged { message: String },
    SolutionFound { message: String, count: usize },
    MarkAdded { message: String, mark: MarkId },
    MarkRemoved { message: String, mark: MarkId },
    MarkValidated { message: String, mark: MarkId },
    /// A proposed mark conflicts with mark `existing`.
    Contradiction { message: String, existing: MarkId },
    FactViolation { message: String, mark: MarkId, fact: FactNum },
    RuleViolation { message: String, mark: MarkId, rule: RuleNum },
    LawViolation { message: String, mark: MarkId },
    PlacersUpdated { message: String, mark: MarkId, rule: RuleNum },
}

impl SolverEvent {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            SolverEvent::Started { message } | SolverEvent::Stopped { message } => message.as_deref(),
            SolverEvent::LevelChanged { message }
            | SolverEvent::SolutionFound { message, .. }
            | SolverEvent::MarkAdded { message, .. }
            | SolverEvent::MarkRemoved { message, .. }
            | SolverEvent::MarkValidated { message, .. }
            | SolverEvent::Contradiction { message, .. }
            | SolverEvent::FactViolation { message, .. }
            | SolverEvent::RuleViolation { message, .. }
            | SolverEvent::LawViolation { message, .. }
            | SolverEvent::PlacersUpdated { message, .. } => Some(message),
        }
    }

    /// The ledger slot the event is about. For a contradiction this is the
    /// existing mark that was contradicted.
    pub fn mark(&self) -> Option<MarkId> {
        match self {
            SolverEvent::Started { .. }
            | SolverEvent::Stopped { .. }
            | SolverEvent::LevelChanged { .. }
            | SolverEvent::SolutionFound { .. } => None,
            SolverEvent::Contradiction { existing, .. } => Some(*existing),
            SolverEvent::MarkAdded { mark, .. }
            | SolverEvent::MarkRemoved { mark, .. }
            | SolverEvent::MarkValidated { mark, .. }
            | SolverEvent::FactViolation { mark, .. }
            | SolverEvent::RuleViolation { mark, .. }
            | SolverEvent::LawViolation { mark, .. }
            | SolverEvent::PlacersUpdated { mark, .. } => Some(*mark),
        }
    }
}

pub trait Viewer: Send + Sync {
    fn notify(&self, ctx: &SolverContext, event: &SolverEvent);
}

/// Viewer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentViewer;

impl Viewer for SilentViewer {
    fn notify(&self, _ctx: &SolverContext, _event: &SolverEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let event = SolverEvent::Contradiction { message: "no".into(), existing: 3 };
        assert_eq!(event.name(), "Contradiction");
        assert_eq!(event.message(), Some("no"));
        assert_eq!(event.mark(), Some(3));

        let event = SolverEvent::Started { message: None };
        assert_eq!(event.message(), None);
        assert_eq!(event.mark(), None);
    }
}
