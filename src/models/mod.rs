//! Core data models for expense-cli
//!
//! Contains the expense record as persisted in the ledger and the money type
//! used for all amount arithmetic.

pub mod amount;
pub mod expense;

pub use amount::{Amount, AmountParseError};
pub use expense::{Expense, DATE_FORMAT};
