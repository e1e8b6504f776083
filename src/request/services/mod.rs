//! Application services for request intake and status updates.

mod intake;

pub use intake::{RequestIntakeError, RequestIntakeResult, RequestIntakeService};
