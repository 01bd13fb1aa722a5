// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use crate::context::MarkError;
use thiserror::Error;

/// Errors from starting, joining or bypassing a job.
#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error("a job is already running")]
    Busy,
    #[error("no job is running")]
    Idle,
    #[error("the ledger has no mark to validate")]
    EmptyLedger,
    #[error("worker panicked: {0}")]
    WorkerPanicked(String),
    #[error("could not spawn worker thread")]
    Spawn(#[from] std::io::Error),
    #[error(transparent)]
    Mark(#[from] MarkError),
}
