//! Application services for account administration.

mod accounts;

pub use accounts::{AccountService, AccountServiceError, AccountServiceResult};
