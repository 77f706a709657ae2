//! Storage layer for expense-cli
//!
//! Provides the CSV ledger store with atomic full rewrites.

pub mod ledger;

pub use ledger::{ExpenseStore, HEADERS};
