//! User accounts and the role vocabulary.
//!
//! The directory holds the seeded user accounts and supports adding new
//! ones through the account service, which derives a sequential decimal
//! identifier and publishes a success notification. Roles gate navigation
//! visibility elsewhere in the core.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
