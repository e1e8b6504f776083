//! Serviced physical sites.
//!
//! Sites are the physical locations that service requests are raised
//! against. The collection is seeded and read-only in this version: there
//! is no creation or mutation operation, and the per-site request/task
//! counters are denormalized snapshots rather than live joins.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
