//! Aggregate statistics over the request and task collections.
//!
//! Everything here is a pure function over slices: histograms, completion
//! rates, and the combined report summary are recomputed from scratch on
//! every call. There is no incremental maintenance and no caching.

mod breakdown;
mod summary;

pub use breakdown::{PriorityBreakdown, RequestStatusBreakdown, TaskStatusBreakdown, percentage};
pub use summary::{AVERAGE_RESOLUTION_DAYS, REQUESTS_PER_WEEK, ReportSummary};

#[cfg(test)]
mod tests;
