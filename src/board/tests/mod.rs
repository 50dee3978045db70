//! Unit tests for board reconciliation.

mod reorder_tests;
