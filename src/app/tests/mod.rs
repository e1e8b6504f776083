//! Tests for the application controller.
