//! Error types for sign-in and section parsing.

use thiserror::Error;

/// Errors returned by the sign-in operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignInError {
    /// Username or password was left blank.
    #[error("username and password are both required")]
    MissingCredentials,

    /// Credentials matched no demo account.
    #[error("invalid username or password")]
    InvalidCredentials,
}

/// Error returned while parsing navigation sections from raw strings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct ParseSectionError(pub String);
