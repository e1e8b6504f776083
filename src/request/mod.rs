//! Service request intake and status lifecycle.
//!
//! A service request is a ticket raised against a serviced site. Requests
//! are created through the intake service, which derives a sequential
//! `REQ-NNN` identifier, stamps the creation date from the injected clock,
//! and publishes a success notification. After creation the status is the
//! only mutable field. The module follows hexagonal architecture:
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
