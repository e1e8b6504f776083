//! Tests for the aggregation engine.

mod breakdown_tests;
