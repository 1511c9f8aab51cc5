// SPDX-FileCopyrightText: 2026 Tally Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the VoteStore trait.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use tally_config::model::StorageConfig;
use tally_core::{HealthStatus, TallyError, VoteStore, VoterRecord};

use crate::database::Database;
use crate::queries;

/// SQLite-backed vote store.
///
/// Wraps a [`Database`] handle and delegates query operations to the typed
/// query module. The database is lazily initialized on the first call to
/// [`VoteStore::initialize`].
pub struct SqliteVoteStore {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteVoteStore {
    /// Create a new SqliteVoteStore with the given configuration.
    ///
    /// The database connection is not opened until [`VoteStore::initialize`]
    /// is called.
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    /// Returns a reference to the underlying Database, or an error if not initialized.
    fn db(&self) -> Result<&Database, TallyError> {
        self.db.get().ok_or_else(|| TallyError::Storage {
            source: "store not initialized -- call initialize() first".into(),
        })
    }
}

#[async_trait]
impl VoteStore for SqliteVoteStore {
    async fn initialize(&self) -> Result<(), TallyError> {
        let db = Database::open_with(&self.config.database_path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| TallyError::Storage {
            source: "store already initialized".into(),
        })?;
        debug!(path = %self.config.database_path, "sqlite vote store initialized");
        Ok(())
    }

    async fn close(&self) -> Result<(), TallyError> {
        // Checkpoint only if the DB was ever opened.
        if let Some(db) = self.db.get() {
            db.checkpoint().await?;
            debug!("WAL checkpoint complete");
        }
        Ok(())
    }

    async fn health_check(&self) -> Result<HealthStatus, TallyError> {
        let db = self.db()?;
        db.connection()
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("SELECT 1;")?;
                Ok(())
            })
            .await
            .map_err(crate::database::map_tr_err)?;
        Ok(HealthStatus::Healthy)
    }

    async fn get_voter(&self, name: &str) -> Result<Option<VoterRecord>, TallyError> {
        queries::voters::get_voter(self.db()?, name).await
    }

    async fn list_voters(&self) -> Result<Vec<VoterRecord>, TallyError> {
        queries::voters::list_voters(self.db()?).await
    }

    async fn vote(&self, name: &str) -> Result<i64, TallyError> {
        let db = self.db()?;

        // The lookup and the write are two independent calls with no
        // transaction between them. Concurrent votes for the same name can
        // interleave here and lose updates.
        match queries::voters::get_voter(db, name).await? {
            None => {
                info!(voter = name, "voter not found, recording first vote");
                let record = VoterRecord {
                    name: name.to_string(),
                    count: 1,
                };
                queries::voters::insert_voter(db, &record).await?;
                Ok(1)
            }
            Some(record) => {
                let new_count = record.count + 1;
                info!(voter = name, count = record.count, new_count, "incrementing vote");
                queries::voters::update_count(db, name, new_count).await?;
                Ok(new_count)
            }
        }
    }
}
