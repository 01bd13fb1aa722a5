// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Outcomes of proposing and validating marks.

use crate::catalog::{FactNum, RuleNum};
use crate::ledger::MarkId;
use thiserror::Error;

/// Successful outcome of proposing a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkStatus {
    /// The mark was recorded (and, unless entered by the user, validated).
    Entered(MarkId),
    /// The same relation was already recorded by the given mark.
    AlreadyPresent(MarkId),
    /// Nothing was done: a stop was requested, or rule triggers are disabled.
    Skipped,
}

impl MarkStatus {
    pub fn mark(self) -> Option<MarkId> {
        match self {
            MarkStatus::Entered(id) | MarkStatus::AlreadyPresent(id) => Some(id),
            MarkStatus::Skipped => None,
        }
    }
}

/// Recoverable failures. Nothing here indicates a defect; defects panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkError {
    /// The proposed verb contradicts an existing mark. Nothing was recorded.
    #[error("contradicts mark {existing}")]
    Contradiction { existing: MarkId },
    /// A rule proposed a verb contradicting an existing mark. Nothing was
    /// recorded and nothing was announced; the rule reports it as a violation.
    #[error("rule conflicts with mark {existing}")]
    RuleConflict { existing: MarkId },
    #[error("mark {mark} violates fact {fact}")]
    FactViolation { mark: MarkId, fact: FactNum },
    #[error("mark {mark} violates rule {rule}")]
    RuleViolation { mark: MarkId, rule: RuleNum },
    #[error("mark {mark} violates a law: {message}")]
    LawViolation { mark: MarkId, message: String },
}

impl MarkError {
    pub fn is_violation(&self) -> bool {
        matches!(
            self,
            MarkError::FactViolation { .. } | MarkError::RuleViolation { .. } | MarkError::LawViolation { .. }
        )
    }
}
