use chrono::{Months, NaiveDateTime};

use crate::models::Transaction;

/// How the ledger table is currently arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerMode {
    DateAscending,
    DateDescending,
    AmountAscending,
    AmountDescending,
    Spending,
    Income,
    LastMonth,
}

impl LedgerMode {
    pub fn label(self) -> &'static str {
        match self {
            LedgerMode::DateAscending => "Sorted by date (ascending)",
            LedgerMode::DateDescending => "Sorted by date (descending)",
            LedgerMode::AmountAscending => "Sorted by amount (ascending)",
            LedgerMode::AmountDescending => "Sorted by amount (descending)",
            LedgerMode::Spending => "Filtered by spending",
            LedgerMode::Income => "Filtered by income",
            LedgerMode::LastMonth => "Filtered by logs within the last month",
        }
    }
}

pub fn sort_by_date(rows: &mut [Transaction]) {
    rows.sort_by(|a, b| a.date.cmp(&b.date));
}

pub fn sort_by_amount(rows: &mut [Transaction]) {
    rows.sort_by(|a, b| a.amount.total_cmp(&b.amount));
}

/// Arrange `rows` (in store order) for display. Descending sorts are the
/// ascending sort reversed; filters keep store order, newest insert first.
pub fn arrange(mut rows: Vec<Transaction>, mode: LedgerMode, now: NaiveDateTime) -> Vec<Transaction> {
    match mode {
        LedgerMode::DateAscending => sort_by_date(&mut rows),
        LedgerMode::DateDescending => {
            sort_by_date(&mut rows);
            rows.reverse();
        }
        LedgerMode::AmountAscending => sort_by_amount(&mut rows),
        LedgerMode::AmountDescending => {
            sort_by_amount(&mut rows);
            rows.reverse();
        }
        LedgerMode::Spending => {
            rows.retain(|t| t.amount < 0.0);
            rows.reverse();
        }
        LedgerMode::Income => {
            rows.retain(|t| t.amount > 0.0);
            rows.reverse();
        }
        LedgerMode::LastMonth => {
            let cutoff = now.checked_sub_months(Months::new(1)).unwrap_or(now);
            rows.retain(|t| t.date >= cutoff);
            rows.reverse();
        }
    }
    rows
}
