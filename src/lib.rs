//! RequestHub: service request management core.
//!
//! This crate is the framework-free core of a dashboard for tracking
//! service requests, derived work tasks, serviced sites, and users across
//! three role tiers. All state is in-memory and owned by a single
//! controller; the rendering layer is an external collaborator that reads
//! plain snapshots and submits intents back through the controller.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory storage)
//!
//! # Modules
//!
//! - [`request`]: Service request intake and status lifecycle
//! - [`workboard`]: Derived work tasks and kanban bucketing
//! - [`site`]: Serviced physical sites
//! - [`directory`]: User accounts and roles
//! - [`session`]: Demo sign-in session and navigation access
//! - [`reporting`]: Aggregate statistics, recomputed on every read
//! - [`notify`]: Fire-and-forget notification contract
//! - [`app`]: The controller owning all application state

pub mod app;
pub mod directory;
pub mod notify;
pub mod reporting;
pub mod request;
pub mod session;
pub mod site;
pub mod workboard;
