//! Demo sign-in session and navigation access.
//!
//! Sign-in checks submitted credentials against a fixed table of three
//! demo accounts, suspending briefly to imitate network latency before
//! resolving. A successful check yields an authenticated session carrying
//! the account role, which the access gate uses to filter the navigation
//! menu. The gate is advisory: it controls which entry points the
//! rendering layer shows, not an enforced authorization boundary.
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
