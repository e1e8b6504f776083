//! Tests for the directory context.
