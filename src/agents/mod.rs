// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reference collaborators.
//!
//! Real finders and lawyers are supplied by the application. The ones here
//! are small but complete, and are used to exercise the engine.
//!
//! # Organization
//!
//! - `test`: finders, lawyers and a viewer for driving and observing the engine
//! - [`ConfirmingLawyer`]: the lawyer that accepts every mark


use crate::context::{MarkError, SolverContext};
use crate::engine::Lawyer;
use crate::ledger::MarkId;

/// Lawyer that confirms every mark without checking it.
///
/// Useful when the caller already knows every mark it enters is consistent.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfirmingLawyer;

impl Lawyer for ConfirmingLawyer {
    fn validate(&mut self, ctx: &mut SolverContext, mark: MarkId) -> Result<(), MarkError> {
        ctx.confirm_mark(mark);
        Ok(())
    }
}
