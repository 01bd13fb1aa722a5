// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The three jobs a worker can run.

use super::{CoordinatorError, Finder, Lawyer};
use crate::context::SolverContext;
use strum_macros::IntoStaticStr;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum Job {
    /// Reset the ledger and run the finder until it is exhausted or stopped.
    Search,
    /// Run the lawyer on the most recently entered mark.
    ValidateLast,
    /// Undo back to and including the last user mark.
    Retract,
}

impl Job {
    /// Name given to the worker thread.
    pub fn thread_name(self) -> &'static str {
        match self {
            Job::Search => "Finder",
            Job::ValidateLast => "Lawyer",
            Job::Retract => "Eraser",
        }
    }
}

/// Summary of a finished job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobReport {
    pub job: Job,
    /// Ledger length when the job ended.
    pub marks: usize,
    pub num_valid: usize,
    pub solutions: usize,
    /// Whether the job ended with a stop request pending.
    pub stopped: bool,
}

impl JobReport {
    fn new(job: Job, ctx: &SolverContext) -> Self {
        Self {
            job,
            marks: ctx.ledger().len(),
            num_valid: ctx.num_valid(),
            solutions: ctx.num_solutions(),
            stopped: ctx.stop_requested(),
        }
    }
}

/// Run one job to completion on the current thread.
///
/// The coordinator calls this on its worker thread; tests call it directly.
pub fn run_job(
    job: Job,
    ctx: &mut SolverContext,
    finder: &mut dyn Finder,
    lawyer: &mut dyn Lawyer,
) -> Result<JobReport, CoordinatorError> {
    info!(job = job.thread_name(), marks = ctx.ledger().len(), "job started");
    let result = match job {
        Job::Search => search(ctx, finder, lawyer),
        Job::ValidateLast => validate_last(ctx, lawyer),
        Job::Retract => {
            ctx.say_started(None);
            ctx.undo_to_last_user_mark();
            ctx.say_stopped(None);
            Ok(())
        }
    };
    let report = JobReport::new(job, ctx);
    info!(
        job = job.thread_name(),
        marks = report.marks,
        solutions = report.solutions,
        stopped = report.stopped,
        "job finished"
    );
    result.map(|_| report)
}

fn search(ctx: &mut SolverContext, finder: &mut dyn Finder, lawyer: &mut dyn Lawyer) -> Result<(), CoordinatorError> {
    ctx.reset();
    let started = ctx.start_clock();
    ctx.say_started(Some(format!("I started solving at {}.", started)));

    let result = finder.find(ctx, lawyer);

    let message = format!(
        "I stopped solving at {} in {} ms.",
        ctx.clock_stamp(),
        ctx.elapsed_ms()
    );
    ctx.say_stopped(Some(message));
    result.map_err(CoordinatorError::from)
}

fn validate_last(ctx: &mut SolverContext, lawyer: &mut dyn Lawyer) -> Result<(), CoordinatorError> {
    let mark = ctx.ledger().last().map(|m| m.num).ok_or(CoordinatorError::EmptyLedger)?;
    ctx.say_started(None);
    let result = lawyer.validate(ctx, mark);
    if result.is_ok() {
        ctx.check_solution(mark);
    }
    ctx.say_stopped(None);
    result.map_err(CoordinatorError::from)
}
