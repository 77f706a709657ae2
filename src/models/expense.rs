//! Expense record model
//!
//! An expense is one row of the ledger file. Date and amount are kept as the
//! raw text found in storage: malformed dates are tolerated until an
//! operation actually needs a calendar date, and amounts are only interpreted
//! when arithmetic is required.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::amount::{Amount, AmountParseError};

/// Date format used throughout the ledger
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single expense row as persisted in the ledger file
///
/// Field names map to the CSV header (`Date,Category,Description,Amount`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Expense {
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: String,
}

impl Expense {
    /// Create a well-formed expense with a normalized 2-decimal amount
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: Amount,
    ) -> Self {
        Self {
            date: date.format(DATE_FORMAT).to_string(),
            category: category.into(),
            description: description.into(),
            amount: amount.to_string(),
        }
    }

    /// Parse the date field as a calendar date
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Parse the amount field as a decimal amount
    pub fn parsed_amount(&self) -> Result<Amount, AmountParseError> {
        Amount::parse(&self.amount)
    }

    /// Check that both date and amount parse; only such rows participate in
    /// summaries
    pub fn is_well_formed(&self) -> bool {
        self.parsed_date().is_some() && self.parsed_amount().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            "Food",
            "lunch",
            Amount::from_cents(1250),
        )
    }

    #[test]
    fn test_new_normalizes_fields() {
        let expense = sample();
        assert_eq!(expense.date, "2023-01-15");
        assert_eq!(expense.amount, "12.50");
    }

    #[test]
    fn test_parsed_date() {
        let expense = sample();
        assert_eq!(
            expense.parsed_date(),
            NaiveDate::from_ymd_opt(2023, 1, 15)
        );

        let malformed = Expense {
            date: "not-a-date".into(),
            ..sample()
        };
        assert_eq!(malformed.parsed_date(), None);
    }

    #[test]
    fn test_parsed_amount() {
        assert_eq!(sample().parsed_amount().unwrap().cents(), 1250);

        let malformed = Expense {
            amount: "twelve".into(),
            ..sample()
        };
        assert!(malformed.parsed_amount().is_err());
    }

    #[test]
    fn test_is_well_formed() {
        assert!(sample().is_well_formed());
        assert!(!Expense {
            date: "2023-13-40".into(),
            ..sample()
        }
        .is_well_formed());
        assert!(!Expense {
            amount: "".into(),
            ..sample()
        }
        .is_well_formed());
    }
}
