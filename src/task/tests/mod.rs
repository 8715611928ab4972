//! Unit tests for the task reward ledger.

mod support;
