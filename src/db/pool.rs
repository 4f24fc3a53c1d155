//! SQLite connection wrapper (one connection per process is enough for a CLI).

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Private, throwaway database (tests and dry runs).
    pub fn in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Filesystem path of the main database, empty for in-memory ones.
    pub fn path(&self) -> Option<String> {
        self.conn.path().map(|p| p.to_string()).filter(|p| !p.is_empty())
    }
}
