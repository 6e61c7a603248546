use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::Result;
use crate::models::{Category, Direction, NewTransaction, Transaction, User};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a stored timestamp. Date-only values read as midnight.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

pub fn insert_user(conn: &Connection, user: &User) -> Result<()> {
    conn.execute(
        "INSERT INTO user (firstName, lastName, email, dateOfBirth, occupation, balance) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            user.first_name,
            user.last_name,
            user.email,
            user.date_of_birth,
            user.occupation,
            user.balance,
        ],
    )?;
    Ok(())
}

/// The first profile row by insertion order, if any.
pub fn first_user(conn: &Connection) -> Result<Option<User>> {
    let user = conn
        .query_row(
            "SELECT firstName, lastName, email, dateOfBirth, occupation, balance FROM user ORDER BY rowid LIMIT 1",
            [],
            |row| {
                Ok(User {
                    first_name: row.get(0)?,
                    last_name: row.get(1)?,
                    email: row.get(2)?,
                    date_of_birth: row.get(3)?,
                    occupation: row.get(4)?,
                    balance: row.get::<_, Option<f64>>(5)?.unwrap_or(0.0),
                })
            },
        )
        .optional()?;
    Ok(user)
}

struct RawTransaction {
    id: i64,
    name: String,
    direction: bool,
    amount: f64,
    category: String,
    date: Option<String>,
}

impl RawTransaction {
    fn into_transaction(self) -> Option<Transaction> {
        let category = match self.category.parse::<Category>() {
            Ok(c) => c,
            Err(_) => {
                tracing::warn!(id = self.id, category = %self.category, "skipping record with unknown category");
                return None;
            }
        };
        let date = match self.date.as_deref().and_then(parse_timestamp) {
            Some(d) => d,
            None => {
                tracing::warn!(id = self.id, date = ?self.date, "skipping record with unreadable date");
                return None;
            }
        };
        if Direction::of(self.amount).is_incoming() != self.direction {
            tracing::warn!(
                id = self.id,
                amount = self.amount,
                stored_direction = self.direction,
                "stored direction disagrees with amount sign; using the sign"
            );
        }
        Some(Transaction {
            id: self.id,
            name: self.name,
            amount: self.amount,
            category,
            date,
        })
    }
}

/// All ledger rows in id order. Rows that cannot be decoded are skipped.
pub fn all_transactions(conn: &Connection) -> Result<Vec<Transaction>> {
    let mut stmt = conn.prepare("SELECT id, name, direction, amount, type, date FROM finances ORDER BY id")?;
    let raw = stmt
        .query_map([], |row| {
            Ok(RawTransaction {
                id: row.get(0)?,
                name: row.get(1)?,
                direction: row.get(2)?,
                amount: row.get(3)?,
                category: row.get(4)?,
                date: row.get(5)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(raw.into_iter().filter_map(RawTransaction::into_transaction).collect())
}

/// Insert a record and return its assigned id.
pub fn insert_transaction(conn: &Connection, txn: &NewTransaction) -> Result<i64> {
    let incoming = txn.direction().is_incoming();
    match txn.date {
        Some(date) => conn.execute(
            "INSERT INTO finances (name, direction, amount, type, date) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                txn.name,
                incoming,
                txn.amount,
                txn.category.db_value(),
                date.format(TIMESTAMP_FORMAT).to_string(),
            ],
        )?,
        None => conn.execute(
            "INSERT INTO finances (name, direction, amount, type) VALUES (?1, ?2, ?3, ?4)",
            params![txn.name, incoming, txn.amount, txn.category.db_value()],
        )?,
    };
    Ok(conn.last_insert_rowid())
}

/// Returns the number of rows removed (0 when the id does not exist).
pub fn delete_transaction(conn: &Connection, id: i64) -> Result<usize> {
    Ok(conn.execute("DELETE FROM finances WHERE id = ?1", [id])?)
}

pub fn count_transactions(conn: &Connection) -> Result<i64> {
    Ok(conn.query_row("SELECT count(*) FROM finances", [], |r| r.get(0))?)
}

/// Insert a batch in one SQL transaction and return the signed net of the
/// batch (credits minus debit magnitudes).
pub fn insert_batch(conn: &Connection, txns: &[NewTransaction]) -> Result<f64> {
    let tx = conn.unchecked_transaction()?;
    for txn in txns {
        insert_transaction(&tx, txn)?;
    }
    tx.commit()?;
    Ok(txns.iter().map(|t| t.amount).sum())
}
