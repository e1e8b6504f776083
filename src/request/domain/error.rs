//! Error types for request domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain request values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestDomainError {
    /// The request title is empty after trimming.
    #[error("request title must not be empty")]
    EmptyTitle,

    /// The site reference is empty after trimming.
    #[error("request must reference a site")]
    EmptySiteReference,
}

/// Error returned while parsing request statuses from raw strings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown request status: {0}")]
pub struct ParseRequestStatusError(pub String);

/// Error returned while parsing priorities from raw strings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);
