// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The two collaborators that drive the ledger.
//!
//! A [`Finder`] decides which mark to try next and when to guess. A
//! [`Lawyer`] validates each non-user mark as soon as it is recorded, and
//! may enter the marks that the mark forces. Both call back into the
//! [`SolverContext`]; the lawyer is reentrant, since the marks it enters are
//! validated by the same lawyer before `add_mark` returns.
//!
//! # Example
//!
//! ```
//! use logic_grid::context::{MarkError, SolverContext};
//! use logic_grid::engine::Lawyer;
//! use logic_grid::ledger::MarkId;
//!
//! /// Accepts every mark without looking at it.
//! struct TrustingLawyer;
//!
//! impl Lawyer for TrustingLawyer {
//!     fn validate(&mut self, ctx: &mut SolverContext, mark: MarkId) -> Result<(), MarkError> {
//!         ctx.confirm_mark(mark);
//!         Ok(())
//!     }
//! }
//! ```

use crate::catalog::Catalog;
use crate::context::{MarkError, SolverContext};
use crate::ledger::MarkId;

pub trait Lawyer: Send {
    /// Called when a new catalog is attached to the solver.
    fn attach(&mut self, _catalog: &Catalog) {}

    /// Validate a recorded mark.
    ///
    /// On success the lawyer must call [`SolverContext::confirm_mark`]; only
    /// confirmed marks count towards a solution. An error aborts the caller's
    /// insertion chain but does not undo what was recorded.
    fn validate(&mut self, ctx: &mut SolverContext, mark: MarkId) -> Result<(), MarkError>;
}

pub trait Finder: Send {
    /// Called when a new catalog is attached to the solver.
    fn attach(&mut self, _catalog: &Catalog) {}

    /// Search for solutions, entering marks through `ctx.add_mark(lawyer, ..)`.
    ///
    /// Must poll [`SolverContext::stop_requested`] between marks and return
    /// promptly once it is set.
    fn find(&mut self, ctx: &mut SolverContext, lawyer: &mut dyn Lawyer) -> Result<(), MarkError>;
}
