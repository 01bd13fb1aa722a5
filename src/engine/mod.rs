// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Execution coordinator.
//!
//! At most one worker runs against a [`SolverContext`] at a time. A worker
//! runs one of three [`Job`]s:
//! - Search: reset, then let the [`Finder`] explore until it is exhausted or stopped
//! - ValidateLast: let the [`Lawyer`] validate the mark the user just entered
//! - Retract: undo back to and including the last user mark
//!
//! # Pausing
//!
//! After every notification the worker may suspend, depending on the
//! configured pause table and on [`Coordinator::request_pause`]. A suspended
//! worker stays suspended until [`Coordinator::resume`] or
//! [`Coordinator::request_stop`]; it never yields in the middle of a mark,
//! so whatever a viewer sees between notifications is consistent.
//!
//! # Example
//!
//! ```
//! use logic_grid::agents::test::{ExclusionLawyer, GuessingFinder};
//! use logic_grid::catalog::Catalog;
//! use logic_grid::config::SolverConfig;
//! use logic_grid::context::SolverContext;
//! use logic_grid::engine::{Coordinator, Job, SilentViewer};
//! use std::sync::Arc;
//!
//! let catalog = Catalog::builder()
//!     .noun_type("Color", &["Red", "Blue"])
//!     .noun_type("Pet", &["Cat", "Dog"])
//!     .build()
//!     .unwrap();
//! let ctx = SolverContext::new(Arc::new(catalog), SolverConfig::quiet(), Arc::new(SilentViewer));
//! let mut coordinator = Coordinator::new(ctx, Box::new(GuessingFinder::new()), Box::new(ExclusionLawyer::new()));
//!
//! coordinator.start(Job::Search).unwrap();
//! let report = coordinator.join().unwrap();
//! assert_eq!(report.solutions, 2);
//! ```

pub mod collaborator;
pub mod control;
pub mod errors;
pub mod job;
pub mod observer;

pub use collaborator::{Finder, Lawyer};
pub use control::{PauseGate, WorkerControl};
pub use errors::CoordinatorError;
pub use job::{run_job, Job, JobReport};
pub use observer::{SilentViewer, SolverEvent, Viewer};

use crate::catalog::{Catalog, NounId, Verb};
use crate::context::{MarkStatus, SolverContext};
use parking_lot::Mutex;
use std::any::Any;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::warn;

/// Everything a worker needs, locked for the duration of a job.
struct Session {
    ctx: SolverContext,
    finder: Box<dyn Finder>,
    lawyer: Box<dyn Lawyer>,
}

/// Single-worker dispatcher for solver jobs.
///
/// The worker holds the session for the whole job, including while it is
/// suspended at a pause point. Inspect state at a pause from
/// [`Viewer::notify`], which runs on the worker with the context borrowed;
/// [`Coordinator::with_context`] only succeeds between jobs.
pub struct Coordinator {
    session: Arc<Mutex<Session>>,
    control: Arc<WorkerControl>,
    worker: Option<JoinHandle<Result<JobReport, CoordinatorError>>>,
}

impl Coordinator {
    /// Take ownership of a context and hand its catalog to both collaborators.
    pub fn new(ctx: SolverContext, mut finder: Box<dyn Finder>, mut lawyer: Box<dyn Lawyer>) -> Self {
        finder.attach(ctx.catalog());
        lawyer.attach(ctx.catalog());
        let control = ctx.control();
        Self {
            session: Arc::new(Mutex::new(Session { ctx, finder, lawyer })),
            control,
            worker: None,
        }
    }

    /// Start `job` on a new worker thread.
    ///
    /// Rejected with [`CoordinatorError::Busy`] while another job is running.
    pub fn start(&mut self, job: Job) -> Result<(), CoordinatorError> {
        if self.worker.as_ref().is_some_and(|w| !w.is_finished()) {
            return Err(CoordinatorError::Busy);
        }
        // Reap a finished worker whose report was never collected
        if let Some(previous) = self.worker.take() {
            if let Err(err) = Self::reap(previous) {
                warn!(%err, "discarding result of previous job");
            }
        }

        let guard = self.control.begin().ok_or(CoordinatorError::Busy)?;
        let session = Arc::clone(&self.session);
        let handle = thread::Builder::new()
            .name(job.thread_name().to_string())
            .spawn(move || {
                let _guard = guard;
                let mut session = session.lock();
                let Session { ctx, finder, lawyer } = &mut *session;
                run_job(job, ctx, finder.as_mut(), lawyer.as_mut())
            })?;
        self.worker = Some(handle);
        Ok(())
    }

    /// Wait for the running job and return its report.
    pub fn join(&mut self) -> Result<JobReport, CoordinatorError> {
        let handle = self.worker.take().ok_or(CoordinatorError::Idle)?;
        Self::reap(handle)
    }

    fn reap(handle: JoinHandle<Result<JobReport, CoordinatorError>>) -> Result<JobReport, CoordinatorError> {
        handle
            .join()
            .map_err(|payload| CoordinatorError::WorkerPanicked(panic_message(payload)))?
    }

    pub fn is_busy(&self) -> bool {
        self.control.is_working()
    }

    /// Ask the worker to suspend at its next pause point.
    pub fn request_pause(&self) {
        self.control.gate().request_pause();
    }

    /// Release a suspended worker. Returns false if it was not suspended.
    pub fn resume(&self) -> bool {
        self.control.gate().resume()
    }

    pub fn request_stop(&self) {
        self.control.request_stop();
    }

    pub fn is_paused(&self) -> bool {
        self.control.gate().is_paused()
    }

    /// Inspect the context while no job holds it.
    ///
    /// Returns [`CoordinatorError::Busy`] while a job runs, paused or not.
    pub fn with_context<R>(&self, f: impl FnOnce(&SolverContext) -> R) -> Result<R, CoordinatorError> {
        let session = self.session.try_lock().ok_or(CoordinatorError::Busy)?;
        Ok(f(&session.ctx))
    }

    /// Enter a user mark without validating it.
    pub fn add_mark_by_user(&self, noun1: NounId, verb: Verb, noun2: NounId) -> Result<MarkStatus, CoordinatorError> {
        if self.is_busy() {
            return Err(CoordinatorError::Busy);
        }
        let mut session = self.session.try_lock().ok_or(CoordinatorError::Busy)?;
        Ok(session.ctx.add_mark_by_user(noun1, verb, noun2)?)
    }

    /// Enter a user mark and, if it is new, start a job validating it.
    pub fn submit_user_mark(&mut self, noun1: NounId, verb: Verb, noun2: NounId) -> Result<MarkStatus, CoordinatorError> {
        let status = self.add_mark_by_user(noun1, verb, noun2)?;
        if let MarkStatus::Entered(_) = status {
            self.start(Job::ValidateLast)?;
        }
        Ok(status)
    }

    /// Attach a new catalog (or none) and hand it to both collaborators.
    pub fn set_catalog(&self, catalog: Option<Arc<Catalog>>) -> Result<(), CoordinatorError> {
        if self.is_busy() {
            return Err(CoordinatorError::Busy);
        }
        let mut session = self.session.try_lock().ok_or(CoordinatorError::Busy)?;
        let Session { ctx, finder, lawyer } = &mut *session;
        ctx.set_catalog(catalog);
        finder.attach(ctx.catalog());
        lawyer.attach(ctx.catalog());
        Ok(())
    }
}

impl Drop for Coordinator {
    fn drop(&mut self) {
        if let Some(handle) = self.worker.take() {
            self.control.request_stop();
            if let Err(err) = Self::reap(handle) {
                warn!(%err, "job ended with an error during shutdown");
            }
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::from("unknown panic")
    }
}
