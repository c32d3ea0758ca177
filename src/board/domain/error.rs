//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task identifier is not a positive integer.
    #[error("invalid task identifier {0}, expected a positive integer")]
    InvalidTaskId(u64),

    /// The move direction is neither `-1` nor `+1`.
    #[error("invalid move direction {0}, expected -1 or 1")]
    InvalidDirection(i64),

    /// The identifier counter has no value left to hand out.
    #[error("task identifiers are exhausted")]
    IdsExhausted,
}

/// Error returned while parsing stages from persistence or user input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown stage: {0}")]
pub struct ParseStageError(pub String);
