//! Pure query and aggregation functions over in-memory expense lists
//!
//! Nothing here touches the filesystem; callers read records from the store
//! and hand in slices.

use std::collections::BTreeMap;

use chrono::Datelike;
use log::warn;

use crate::error::ExpenseResult;
use crate::models::{Amount, Expense};

/// Criteria for selecting expenses; `None` matches everything
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Category name, matched case-insensitively
    pub category: Option<String>,
    /// Calendar year of the expense date
    pub year: Option<i32>,
    /// Calendar month of the expense date (1-12)
    pub month: Option<u32>,
}

impl ExpenseFilter {
    /// Whether an expense satisfies every provided criterion
    ///
    /// Expenses whose date does not parse never match, even under an
    /// all-wildcard filter.
    fn matches(&self, expense: &Expense) -> bool {
        let date = match expense.parsed_date() {
            Some(date) => date,
            None => return false,
        };

        if let Some(category) = &self.category {
            if !expense.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(year) = self.year {
            if date.year() != year {
                return false;
            }
        }
        if let Some(month) = self.month {
            if date.month() != month {
                return false;
            }
        }
        true
    }
}

/// Select expenses matching the filter, preserving input order
pub fn filter(expenses: &[Expense], criteria: &ExpenseFilter) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|expense| criteria.matches(expense))
        .cloned()
        .collect()
}

/// Sum the amount column
///
/// Fails on the first non-numeric amount; rows are assumed well-formed at
/// this stage (only the date field tolerates garbage).
pub fn sum_amounts(expenses: &[Expense]) -> ExpenseResult<Amount> {
    let mut total = Amount::zero();
    for expense in expenses {
        total += expense.parsed_amount()?;
    }
    Ok(total)
}

/// Sorted, de-duplicated category names across all expenses
pub fn distinct_categories(expenses: &[Expense]) -> Vec<String> {
    let mut categories: Vec<String> = expenses
        .iter()
        .map(|expense| expense.category.clone())
        .collect();
    categories.sort();
    categories.dedup();
    categories
}

/// Year/month aggregation of well-formed expenses
#[derive(Debug, Default)]
pub struct Summary {
    /// year -> month number (1-12) -> summed amount; BTreeMap keys keep both
    /// levels chronological
    pub years: BTreeMap<i32, BTreeMap<u32, Amount>>,
    /// Rows excluded for an unparseable date or amount, in input order
    pub skipped: Vec<Expense>,
}

impl Summary {
    /// Check whether no rows contributed
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Total across all months of one year
    pub fn year_total(&self, year: i32) -> Amount {
        self.years
            .get(&year)
            .map(|months| months.values().copied().sum())
            .unwrap_or_else(Amount::zero)
    }

    /// Total across all years
    pub fn grand_total(&self) -> Amount {
        self.years
            .values()
            .flat_map(|months| months.values().copied())
            .sum()
    }
}

/// Group well-formed expenses into per-year, per-month totals
///
/// Rows with an unparseable date or amount land in `Summary::skipped`
/// instead of aborting the aggregation.
pub fn summarize(expenses: &[Expense]) -> Summary {
    let mut summary = Summary::default();

    for expense in expenses {
        let (date, amount) = match (expense.parsed_date(), expense.parsed_amount()) {
            (Some(date), Ok(amount)) => (date, amount),
            _ => {
                warn!(
                    "skipping malformed row: {},{},{},{}",
                    expense.date, expense.category, expense.description, expense.amount
                );
                summary.skipped.push(expense.clone());
                continue;
            }
        };

        *summary
            .years
            .entry(date.year())
            .or_default()
            .entry(date.month())
            .or_default() += amount;
    }

    summary
}
