use super::migrations::ensure_schema;
use crate::libs::config::Config;
use crate::libs::error::Result;
use rusqlite::{Connection, OptionalExtension, Params, Row};
use std::path::Path;

/// Outcome of a single write statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Executed {
    pub rows_affected: usize,
    pub inserted_id: i64,
}

/// Synchronous handle on the SQLite store.
///
/// Every constructor turns on foreign-key enforcement, which SQLite leaves off
/// per connection by default. Without it the task owner reference and the
/// cascade on user deletion are not enforced.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database `config` points at and brings its schema up to date.
    pub fn new(config: &Config) -> anyhow::Result<Db> {
        let path = config.database_path()?;
        Ok(Self::open(path)?)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        let mut conn = Connection::open(path)?;
        Self::configure(&conn)?;
        ensure_schema(&mut conn)?;
        Ok(Db { conn })
    }

    pub fn open_in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        Self::configure(&conn)?;
        ensure_schema(&mut conn)?;
        Ok(Db { conn })
    }

    /// Raw connection to the configured database, migrations not applied.
    pub fn new_without_migrations() -> anyhow::Result<Connection> {
        let path = Config::read()?.database_path()?;
        let conn = Connection::open(path)?;
        Self::configure(&conn)?;
        Ok(conn)
    }

    fn configure(conn: &Connection) -> rusqlite::Result<()> {
        conn.pragma_update(None, "foreign_keys", "ON")
    }

    /// Runs one or more DDL statements.
    pub fn execute_ddl(&self, sql: &str) -> Result<()> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    pub fn execute<P: Params>(&self, sql: &str, params: P) -> rusqlite::Result<Executed> {
        let rows_affected = self.conn.execute(sql, params)?;
        Ok(Executed {
            rows_affected,
            inserted_id: self.conn.last_insert_rowid(),
        })
    }

    pub fn query<T, P, F>(&self, sql: &str, params: P, map: F) -> rusqlite::Result<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, map)?;
        rows.collect()
    }

    pub fn query_row<T, P, F>(&self, sql: &str, params: P, map: F) -> rusqlite::Result<Option<T>>
    where
        P: Params,
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        self.conn.query_row(sql, params, map).optional()
    }
}
