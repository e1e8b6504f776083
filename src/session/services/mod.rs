//! Application services for the sign-in session.

mod sign_in;

pub use sign_in::{DEFAULT_SIGN_IN_DELAY, SignInService};
