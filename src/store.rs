use crate::errors::StoreError;
use crate::models::{iso_millis, Entry, EntryChanges, NewEntry};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use std::{fs, path::Path};
use tokio::sync::Mutex;
use tracing::debug;

const SCHEMA_SQL: &str = include_str!("schema.sql");
const ENTRY_COLUMNS: &str = "id, title, description, created_at, scheduled_date";

/// SQLite-backed entry table. Each operation is one statement under the
/// connection lock, so writes are atomic per row.
#[derive(Debug)]
pub struct EntryStore {
    conn: Mutex<Connection>,
}

impl EntryStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if path.as_os_str() == ":memory:" {
            return Self::open_in_memory();
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Self::with_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// All entries in insertion order.
    pub async fn find_all(&self) -> Result<Vec<Entry>, StoreError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&format!("SELECT {ENTRY_COLUMNS} FROM entries ORDER BY rowid ASC"))?;
        let entries = stmt
            .query_map([], parse_entry_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Entry>, StoreError> {
        let conn = self.conn.lock().await;
        select_by_id(&conn, id)
    }

    pub async fn create(&self, entry: NewEntry) -> Result<Entry, StoreError> {
        let conn = self.conn.lock().await;
        let inserted = conn.execute(
            &format!("INSERT INTO entries ({ENTRY_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5)"),
            params![
                entry.id,
                entry.title,
                entry.description,
                iso_millis::format(&entry.created_at),
                iso_millis::format(&entry.scheduled_date),
            ],
        );

        match inserted {
            Ok(_) => {}
            Err(rusqlite::Error::SqliteFailure(err, _)) if err.code == ErrorCode::ConstraintViolation => {
                return Err(StoreError::Duplicate(entry.id));
            }
            Err(err) => return Err(err.into()),
        }
        debug!(id = %entry.id, "entry inserted");

        // read back so dates carry the stored millisecond precision
        select_by_id(&conn, &entry.id)?.ok_or(StoreError::NotFound(entry.id))
    }

    /// Applies `changes` to the row and returns it as stored afterwards.
    pub async fn update(&self, id: &str, changes: EntryChanges) -> Result<Entry, StoreError> {
        let conn = self.conn.lock().await;
        let updated = conn.execute(
            "UPDATE entries SET
               title = COALESCE(?2, title),
               description = COALESCE(?3, description),
               scheduled_date = COALESCE(?4, scheduled_date),
               created_at = ?5
             WHERE id = ?1",
            params![
                id,
                changes.title,
                changes.description,
                changes.scheduled_date.as_ref().map(iso_millis::format),
                iso_millis::format(&changes.created_at),
            ],
        )?;
        if updated == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }

        select_by_id(&conn, id)?.ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let conn = self.conn.lock().await;
        let deleted = conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;
        if deleted == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

fn select_by_id(conn: &Connection, id: &str) -> Result<Option<Entry>, StoreError> {
    conn.query_row(
        &format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE id = ?1"),
        [id],
        parse_entry_row,
    )
    .optional()
    .map_err(StoreError::from)
}

fn parse_entry_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Entry> {
    Ok(Entry {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        created_at: parse_time(3, &row.get::<_, String>(3)?)?,
        scheduled_date: parse_time(4, &row.get::<_, String>(4)?)?,
    })
}

fn parse_time(column: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|error| {
            rusqlite::Error::FromSqlConversionFailure(
                column,
                rusqlite::types::Type::Text,
                Box::new(StoreError::Corrupt(error.to_string())),
            )
        })
}
