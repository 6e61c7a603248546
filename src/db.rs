use std::path::Path;

use rusqlite::Connection;

use crate::error::Result;

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS user (
    firstName TEXT NOT NULL,
    lastName TEXT NOT NULL,
    email TEXT NOT NULL,
    dateOfBirth TEXT,
    occupation TEXT,
    balance REAL DEFAULT 0.0
);

CREATE TABLE IF NOT EXISTS finances (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    direction INTEGER NOT NULL,
    amount REAL NOT NULL,
    type TEXT NOT NULL,
    date TEXT DEFAULT (datetime('now', 'localtime'))
);
";

/// Suffixes of the files SQLite keeps next to a WAL-mode database.
const SIDECAR_SUFFIXES: &[&str] = &["-wal", "-shm"];

pub fn get_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    Ok(conn)
}

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// Delete the database file and its WAL sidecars. Missing files are ignored.
pub fn remove_database(db_path: &Path) -> Result<()> {
    let mut paths = vec![db_path.to_path_buf()];
    for suffix in SIDECAR_SUFFIXES {
        let mut name = db_path.as_os_str().to_owned();
        name.push(suffix);
        paths.push(name.into());
    }
    for path in paths {
        match std::fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
