//! Ledger persistence.
//!
//! [`queries`] holds the fallible SQL. [`LedgerStore`] is what the rest of the
//! application talks to: every storage fault is logged and turned into an
//! empty result or a no-op, so callers always have something to render.

pub mod queries;
pub mod sample;

use std::path::Path;

use rusqlite::Connection;

use crate::db::{get_connection, init_db};
use crate::error::Result;
use crate::models::{NewTransaction, Transaction, User};

pub struct LedgerStore {
    conn: Connection,
}

/// Log a storage fault and substitute a fallback value.
fn or_logged<T>(op: &'static str, result: Result<T>, fallback: T) -> T {
    match result {
        Ok(v) => v,
        Err(e) => {
            tracing::error!(op, error = %e, "ledger store operation failed");
            fallback
        }
    }
}

impl LedgerStore {
    /// Open (creating if needed) the store at `path` and ensure the schema exists.
    pub fn open(path: &Path) -> Result<Self> {
        let store = Self {
            conn: get_connection(path)?,
        };
        store.create_schema();
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.create_schema();
        Ok(store)
    }

    pub fn create_schema(&self) {
        or_logged("create_schema", init_db(&self.conn), ());
    }

    /// Insert a profile row. Calling twice yields two rows; only the first is read.
    pub fn set_user(&self, user: &User) {
        or_logged("set_user", queries::insert_user(&self.conn, user), ());
    }

    /// The configured profile, or `None` when setup has not been completed.
    pub fn get_user(&self) -> Option<User> {
        or_logged("get_user", queries::first_user(&self.conn), None)
    }

    pub fn list_transactions(&self) -> Vec<Transaction> {
        or_logged("list_transactions", queries::all_transactions(&self.conn), Vec::new())
    }

    pub fn add_transaction(&self, txn: &NewTransaction) {
        if let Some(id) = or_logged("add_transaction", queries::insert_transaction(&self.conn, txn).map(Some), None) {
            tracing::debug!(id, name = %txn.name, amount = txn.amount, "added transaction");
        }
    }

    /// Deleting an id that does not exist is not an error.
    pub fn delete_transaction(&self, id: i64) {
        let removed = or_logged("delete_transaction", queries::delete_transaction(&self.conn, id), 0);
        tracing::debug!(id, removed, "delete transaction");
    }

    pub fn transaction_count(&self) -> i64 {
        or_logged("transaction_count", queries::count_transactions(&self.conn), 0)
    }

    /// Insert the demo bundle and return its net value, which becomes the
    /// opening balance. Returns 0 and inserts nothing if the store fails.
    pub fn seed_sample_transactions(&self) -> f64 {
        let samples = sample::sample_transactions();
        let net = or_logged("seed_sample_transactions", queries::insert_batch(&self.conn, &samples), 0.0);
        tracing::info!(count = samples.len(), net, "seeded sample transactions");
        net
    }
}
