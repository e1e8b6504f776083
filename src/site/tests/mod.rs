//! Tests for the site collection.
