//! The dashboard application controller.
//!
//! A single controller owns every piece of application state: the four
//! in-memory collections, the session, the active navigation section, and
//! the sidebar flag. The rendering layer reads plain snapshots and submits
//! intents through the controller's methods; nothing else mutates state.
//!
//! - [`controller::DashboardController`] wires the context services
//! - [`snapshot::DashboardSnapshot`] is the read contract
//! - [`seed`] holds the demo dataset

pub mod controller;
pub mod seed;
pub mod snapshot;

pub use controller::{DashboardController, DashboardError};
pub use snapshot::DashboardSnapshot;

#[cfg(test)]
mod tests;
