use colored::Colorize;
use comfy_table::{Cell, CellAlignment, Table};

use super::{open_db, FilterArg, SortKey};
use crate::error::{FinanceError, Result};
use crate::fmt::{day, money};
use crate::ledger::{arrange, LedgerMode};
use crate::models::{parse_amount, Category, NewTransaction};
use crate::store::queries::{all_transactions, delete_transaction, insert_batch, insert_transaction, parse_timestamp};
use crate::store::sample::sample_transactions;

fn colored_amount(amount: f64) -> String {
    if amount < 0.0 {
        money(amount).red().to_string()
    } else {
        money(amount).green().to_string()
    }
}

pub fn add(name: &str, amount: &str, category: &str, date: Option<&str>) -> Result<()> {
    let amount = parse_amount(amount).ok_or_else(|| FinanceError::InvalidAmount(amount.to_string()))?;
    let category: Category = category.parse()?;
    let mut txn = NewTransaction::new(name, amount, category);
    if let Some(raw) = date {
        txn = txn.at(parse_timestamp(raw).ok_or_else(|| FinanceError::InvalidDate(raw.to_string()))?);
    }

    let conn = open_db()?;
    let id = insert_transaction(&conn, &txn)?;
    println!("Added record {id}: {name} {}", colored_amount(amount));
    Ok(())
}

/// Filters win over sorting; with neither, newest first.
pub fn mode_for(sort: Option<SortKey>, desc: bool, filter: Option<FilterArg>) -> LedgerMode {
    match (filter, sort, desc) {
        (Some(FilterArg::Spending), _, _) => LedgerMode::Spending,
        (Some(FilterArg::Income), _, _) => LedgerMode::Income,
        (Some(FilterArg::LastMonth), _, _) => LedgerMode::LastMonth,
        (None, None, _) => LedgerMode::DateDescending,
        (None, Some(SortKey::Date), false) => LedgerMode::DateAscending,
        (None, Some(SortKey::Date), true) => LedgerMode::DateDescending,
        (None, Some(SortKey::Amount), false) => LedgerMode::AmountAscending,
        (None, Some(SortKey::Amount), true) => LedgerMode::AmountDescending,
    }
}

pub fn list(sort: Option<SortKey>, desc: bool, filter: Option<FilterArg>) -> Result<()> {
    let conn = open_db()?;
    let mode = mode_for(sort, desc, filter);
    let rows = arrange(all_transactions(&conn)?, mode, chrono::Local::now().naive_local());

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Type", "Date", "Amount"]);
    for t in &rows {
        table.add_row(vec![
            Cell::new(t.id),
            Cell::new(&t.name),
            Cell::new(t.category.label()),
            Cell::new(day(&t.date)),
            Cell::new(colored_amount(t.amount)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{} ({} records)\n{table}", mode.label(), rows.len());
    Ok(())
}

pub fn delete(id: i64) -> Result<()> {
    let conn = open_db()?;
    if delete_transaction(&conn, id)? == 0 {
        println!("No record with id {id}");
    } else {
        println!("Deleted record {id}");
    }
    Ok(())
}

pub fn seed() -> Result<()> {
    let conn = open_db()?;
    let samples = sample_transactions();
    let net = insert_batch(&conn, &samples)?;
    println!("Added {} sample records (net {})", samples.len(), colored_amount(net));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_for() {
        assert_eq!(mode_for(None, false, None), LedgerMode::DateDescending);
        assert_eq!(mode_for(Some(SortKey::Date), false, None), LedgerMode::DateAscending);
        assert_eq!(mode_for(Some(SortKey::Amount), true, None), LedgerMode::AmountDescending);
        assert_eq!(
            mode_for(Some(SortKey::Amount), true, Some(FilterArg::Income)),
            LedgerMode::Income
        );
    }
}
