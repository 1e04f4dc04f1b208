//! Database schema migrations for SQLite.
//!
//! Each migration is a SQL batch that moves the schema from version N to N+1.
//! Applied versions are recorded in `schema_migrations`.

use rusqlite::Connection;
use tinkersnest_core::now_millis;

use crate::error::{Result, StoreError};

/// Current schema version.
pub const CURRENT_VERSION: u32 = 1;

/// Initialize or migrate the database schema.
///
/// Idempotent: running it against an up-to-date database does nothing.
pub fn migrate(conn: &mut Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at INTEGER NOT NULL
        )",
        [],
    )?;

    let current = current_version(conn)?;
    if current > CURRENT_VERSION {
        return Err(StoreError::Migration(format!(
            "database schema version {} is newer than supported version {}",
            current, CURRENT_VERSION
        )));
    }

    if current < CURRENT_VERSION {
        let tx = conn.transaction()?;

        for version in (current + 1)..=CURRENT_VERSION {
            apply_migration(&tx, version)?;

            tx.execute(
                "INSERT INTO schema_migrations (version, applied_at) VALUES (?1, ?2)",
                rusqlite::params![version, now_millis()],
            )?;
            tracing::debug!(version, "applied schema migration");
        }

        tx.commit()?;
    }

    Ok(())
}

/// Highest applied schema version, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> Result<u32> {
    let version = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

fn apply_migration(conn: &Connection, version: u32) -> Result<()> {
    match version {
        1 => apply_v1(conn),
        _ => Err(StoreError::Migration(format!(
            "unknown migration version: {}",
            version
        ))),
    }
}

/// Migration v1: one document per post.
fn apply_v1(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- Posts: the document body is CBOR, indexed fields are projected into columns
        CREATE TABLE posts (
            name TEXT PRIMARY KEY,            -- creator-assigned identity
            created INTEGER NOT NULL,         -- Unix ms, write-once
            author TEXT,                      -- projection of document.author
            document BLOB NOT NULL,           -- CBOR {title, publish, content, author}
            updated_at INTEGER NOT NULL       -- local time of last write
        );

        CREATE INDEX idx_posts_created ON posts(created DESC, name ASC);
        CREATE INDEX idx_posts_author ON posts(author);
        "#,
    )?;

    Ok(())
}
