//! Port contracts for service request storage.

pub mod repository;

pub use repository::{RequestRepository, RequestRepositoryError, RequestRepositoryResult};
