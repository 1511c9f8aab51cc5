// SPDX-FileCopyrightText: 2026 Tally Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All access is serialized through tokio-rusqlite's single background
//! thread: every statement ships as a closure to the thread owning the
//! `rusqlite::Connection` and completes a future exactly once with the
//! result or the error. Do NOT create additional Connection instances for
//! writes.

use tally_core::TallyError;
use tracing::debug;

use crate::migrations;

/// Convert a tokio-rusqlite error into `TallyError::Storage`.
pub fn map_tr_err(e: tokio_rusqlite::Error<rusqlite::Error>) -> TallyError {
    TallyError::Storage {
        source: Box::new(e),
    }
}

/// Handle to the embedded SQLite store.
///
/// Wraps a single `tokio_rusqlite::Connection`. Opening runs PRAGMA setup
/// and the embedded migrations, so a freshly opened `Database` always has
/// the current schema.
pub struct Database {
    conn: tokio_rusqlite::Connection,
}

impl Database {
    /// Open (creating if absent) the database at `path` with WAL mode enabled.
    pub async fn open(path: &str) -> Result<Self, TallyError> {
        Self::open_with(path, true).await
    }

    /// Open (creating if absent) the database at `path`.
    ///
    /// Creates missing parent directories, applies PRAGMAs, and runs all
    /// pending migrations.
    pub async fn open_with(path: &str, wal_mode: bool) -> Result<Self, TallyError> {
        if let Some(parent) = std::path::Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| TallyError::Storage {
                source: Box::new(e),
            })?;
        }

        let conn = tokio_rusqlite::Connection::open(path)
            .await
            .map_err(|e| TallyError::Storage {
                source: Box::new(e),
            })?;
        Self::setup(conn, wal_mode).await
    }

    /// Open an in-memory database with the schema applied. Test helper.
    pub async fn open_in_memory() -> Result<Self, TallyError> {
        let conn = tokio_rusqlite::Connection::open_in_memory()
            .await
            .map_err(|e| TallyError::Storage {
                source: Box::new(e),
            })?;
        Self::setup(conn, false).await
    }

    async fn setup(conn: tokio_rusqlite::Connection, wal_mode: bool) -> Result<Self, TallyError> {
        conn.call(move |conn| -> Result<(), rusqlite::Error> {
            if wal_mode {
                conn.pragma_update(None, "journal_mode", "WAL")?;
            }
            conn.pragma_update(None, "synchronous", "NORMAL")?;
            conn.pragma_update(None, "busy_timeout", 5000)?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;

        migrations::run_migrations(&conn).await?;
        debug!(wal_mode, "database opened, schema current");

        Ok(Self { conn })
    }

    /// Returns the underlying tokio-rusqlite connection.
    pub fn connection(&self) -> &tokio_rusqlite::Connection {
        &self.conn
    }

    /// Checkpoint the WAL, flushing pending pages into the main file.
    pub async fn checkpoint(&self) -> Result<(), TallyError> {
        self.conn
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)
    }

    /// Checkpoint and close the connection, consuming the handle.
    pub async fn close(self) -> Result<(), TallyError> {
        self.checkpoint().await?;
        self.conn.close().await.map_err(|e| TallyError::Storage {
            source: Box::new(e),
        })
    }
}
