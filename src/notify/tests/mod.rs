//! Tests for the notification contract.

mod sink_tests;
