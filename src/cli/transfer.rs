use std::path::Path;

use csv::StringRecord;

use super::open_db;
use crate::error::{FinanceError, Result};
use crate::models::{parse_amount, Category, NewTransaction, Transaction};
use crate::store::queries::{all_transactions, insert_batch, parse_timestamp, TIMESTAMP_FORMAT};

const EXPORT_HEADER: [&str; 6] = ["id", "name", "type", "date", "amount", "direction"];

/// One export row. Amounts are written in full so an import reads back the same value.
fn export_row(t: &Transaction) -> [String; 6] {
    let direction = if t.direction().is_incoming() { "in" } else { "out" };
    [
        t.id.to_string(),
        t.name.clone(),
        t.category.db_value().to_string(),
        t.date.format(TIMESTAMP_FORMAT).to_string(),
        t.amount.to_string(),
        direction.to_string(),
    ]
}

/// Write every record to `path` as CSV, oldest id first.
pub fn export(path: &Path) -> Result<()> {
    let conn = open_db()?;
    let rows = all_transactions(&conn)?;

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(EXPORT_HEADER)?;
    for t in &rows {
        wtr.write_record(export_row(t))?;
    }
    wtr.flush()?;

    println!("Exported {} records to {}", rows.len(), path.display());
    Ok(())
}

/// Column positions found in an import file's header row.
struct Columns {
    name: usize,
    amount: usize,
    category: usize,
    date: Option<usize>,
}

fn column(header: &StringRecord, wanted: &[&str]) -> Option<usize> {
    header
        .iter()
        .position(|h| wanted.iter().any(|w| h.trim().eq_ignore_ascii_case(w)))
}

impl Columns {
    fn from_header(header: &StringRecord) -> Option<Self> {
        Some(Self {
            name: column(header, &["name"])?,
            amount: column(header, &["amount"])?,
            category: column(header, &["type", "category"])?,
            date: column(header, &["date"]),
        })
    }

    fn parse(&self, record: &StringRecord) -> Option<NewTransaction> {
        let name = record.get(self.name)?.trim();
        let amount = parse_amount(record.get(self.amount)?)?;
        let category: Category = record.get(self.category)?.parse().ok()?;
        let mut txn = NewTransaction::new(name, amount, category);
        if let Some(raw) = self.date.and_then(|i| record.get(i)).filter(|d| !d.trim().is_empty()) {
            txn = txn.at(parse_timestamp(raw)?);
        }
        Some(txn)
    }
}

/// Read records from a CSV with `name`, `amount` and `type` (or `category`)
/// columns and an optional `date`. Unreadable rows are skipped.
pub fn import(path: &Path) -> Result<()> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let header = rdr.headers()?.clone();
    let Some(columns) = Columns::from_header(&header) else {
        return Err(FinanceError::Other(
            "CSV header needs name, amount and type columns".to_string(),
        ));
    };

    let mut parsed = Vec::new();
    let mut skipped = 0usize;
    for (line, result) in rdr.records().enumerate() {
        match result.ok().and_then(|r| columns.parse(&r)) {
            Some(txn) => parsed.push(txn),
            None => {
                skipped += 1;
                tracing::warn!(row = line + 2, "skipping unreadable CSV row");
            }
        }
    }

    let conn = open_db()?;
    insert_batch(&conn, &parsed)?;
    println!("Imported {} records ({skipped} skipped)", parsed.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_columns_from_export_header() {
        let cols = Columns::from_header(&record(&EXPORT_HEADER)).unwrap();
        assert_eq!((cols.name, cols.amount, cols.category, cols.date), (1, 4, 2, Some(3)));
    }

    #[test]
    fn test_columns_require_core_fields() {
        assert!(Columns::from_header(&record(&["name", "amount"])).is_none());
        let cols = Columns::from_header(&record(&["Category", "Name", "Amount"])).unwrap();
        assert_eq!(cols.date, None);
    }

    #[test]
    fn test_parse_row() {
        let cols = Columns::from_header(&record(&["name", "amount", "type", "date"])).unwrap();
        let txn = cols
            .parse(&record(&["Coffee", "-4.50", "FOODDRINK", "2025-05-10"]))
            .unwrap();
        assert_eq!(txn.amount, -4.5);
        assert_eq!(txn.category, Category::FoodDrink);
        assert_eq!(txn.date, parse_timestamp("2025-05-10"));

        let undated = cols.parse(&record(&["Gift", "20", "Shopping", ""])).unwrap();
        assert_eq!(undated.date, None);

        assert!(cols.parse(&record(&["Coffee", "abc", "FOODDRINK", ""])).is_none());
        assert!(cols.parse(&record(&["Coffee", "1", "Groceries", ""])).is_none());
        assert!(cols.parse(&record(&["Coffee", "1", "Health", "someday"])).is_none());
    }

    #[test]
    fn test_export_row_keeps_full_amount() {
        let t = Transaction {
            id: 3,
            name: "Split bill".to_string(),
            amount: -12.345,
            category: Category::FoodDrink,
            date: parse_timestamp("2025-05-10 18:30:00").unwrap(),
        };
        let row = export_row(&t);
        assert_eq!(row[3], "2025-05-10 18:30:00");
        assert_eq!(row[4], "-12.345");
        assert_eq!(row[5], "out");

        let cols = Columns::from_header(&record(&EXPORT_HEADER)).unwrap();
        let fields: Vec<&str> = row.iter().map(String::as_str).collect();
        let back = cols.parse(&record(&fields)).unwrap();
        assert_eq!(back.amount, t.amount);
        assert_eq!(back.date, Some(t.date));
    }
}
