//! Tests for the session context.

mod access_tests;
mod sign_in_tests;
