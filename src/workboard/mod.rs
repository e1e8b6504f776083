//! Work tasks derived from service requests, and the kanban board.
//!
//! Tasks move along a fixed pipeline of statuses (backlog, todo,
//! in progress, review, done). The task collection is seeded and has no
//! creation or mutation operation in this version; the board service
//! partitions it into ordered columns for board-style display.
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
