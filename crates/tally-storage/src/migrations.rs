// SPDX-FileCopyrightText: 2026 Tally Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Embedded database migrations using refinery.
//!
//! SQL migration files are compiled into the binary at build time via
//! `embed_migrations!`. Migrations run automatically on database open.

use tally_core::TallyError;

mod embedded {
    use refinery::embed_migrations;
    embed_migrations!("migrations");
}

/// Run all pending migrations on the connection's background thread.
///
/// Refinery tracks applied migrations in its own `refinery_schema_history`
/// table, so running against an up-to-date database is a no-op.
pub async fn run_migrations(conn: &tokio_rusqlite::Connection) -> Result<(), TallyError> {
    conn.call(|conn| embedded::migrations::runner().run(conn).map(|_report| ()))
        .await
        .map_err(|e| TallyError::Storage {
            source: Box::new(e),
        })
}
