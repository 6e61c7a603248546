use colored::Colorize;
use comfy_table::{Cell, CellAlignment, Table};

use super::{open_db, parse_month};
use crate::error::Result;
use crate::fmt::{money, percent};
use crate::store::queries::all_transactions;
use crate::summary::{compute_monthly_summary, Outlook};

pub fn monthly(month: Option<&str>) -> Result<()> {
    let reference = match month {
        Some(m) => parse_month(m)?,
        None => chrono::Local::now().date_naive(),
    };
    let conn = open_db()?;
    let s = compute_monthly_summary(reference, &all_transactions(&conn)?);

    let mut table = Table::new();
    table.set_header(vec!["", "This month", "Last month", "Change"]);
    table.add_row(vec![
        Cell::new("Credits".green().bold()),
        Cell::new(money(s.this_month_credits)).set_alignment(CellAlignment::Right),
        Cell::new(money(s.last_month_credits)).set_alignment(CellAlignment::Right),
        Cell::new(percent(s.credit_percent_change)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Debits".red().bold()),
        Cell::new(money(s.this_month_debits)).set_alignment(CellAlignment::Right),
        Cell::new(money(s.last_month_debits)).set_alignment(CellAlignment::Right),
        Cell::new(percent(s.debit_percent_change)).set_alignment(CellAlignment::Right),
    ]);
    println!("Summary for {}\n{table}", reference.format("%B %Y"));
    Ok(())
}

pub fn trends() -> Result<()> {
    let conn = open_db()?;
    let outlook = Outlook::from_transactions(&all_transactions(&conn)?);

    println!("Money in:   {}", money(outlook.credits).green());
    println!("Money out:  {}", money(outlook.debits).red());
    println!("Net:        {}", money(outlook.credits + outlook.debits));
    println!();
    println!("{}", textwrap::fill(outlook.advice(), 72));
    Ok(())
}
