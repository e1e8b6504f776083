//! Port contracts for work task storage.

pub mod repository;

pub use repository::{WorkTaskRepository, WorkTaskRepositoryError, WorkTaskRepositoryResult};
