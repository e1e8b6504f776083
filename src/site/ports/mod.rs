//! Port contracts for site lookup.

pub mod repository;

pub use repository::{SiteRepository, SiteRepositoryError, SiteRepositoryResult};
