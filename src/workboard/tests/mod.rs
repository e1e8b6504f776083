//! Tests for the workboard context.

mod domain_tests;
