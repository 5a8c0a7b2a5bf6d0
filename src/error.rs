//! Crate-level error type

use crate::core::{ConstraintError, FeedbackError, WordError};
use crate::model::{ModelError, ScoreError};
use thiserror::Error;

/// Any error a solving session can produce
#[derive(Debug, Error)]
pub enum SolverError {
    #[error(transparent)]
    Word(#[from] WordError),
    #[error(transparent)]
    Feedback(#[from] FeedbackError),
    #[error(transparent)]
    Constraint(#[from] ConstraintError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error("word list I/O failed")]
    Io(#[from] std::io::Error),
}
