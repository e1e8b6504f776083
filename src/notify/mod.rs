//! Transient notification contract between the core and the rendering layer.
//!
//! Mutation and sign-in operations publish fire-and-forget notifications
//! that a toast-style collaborator displays. The core never waits for an
//! acknowledgement. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
