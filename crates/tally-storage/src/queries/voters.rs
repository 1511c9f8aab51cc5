// SPDX-FileCopyrightText: 2026 Tally Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Voter record operations.
//!
//! Every statement issued is echoed as a structured `info!` event before it
//! runs, carrying the statement text and the bound values.

use rusqlite::params;
use tally_core::TallyError;
use tracing::info;

use crate::database::Database;
use crate::models::VoterRecord;

const GET_VOTER_SQL: &str = "SELECT name, count FROM voters WHERE name = ?1";
const INSERT_VOTER_SQL: &str = "INSERT INTO voters (name, count) VALUES (?1, ?2)";
const UPDATE_COUNT_SQL: &str = "UPDATE voters SET count = ?1 WHERE name = ?2";
const LIST_VOTERS_SQL: &str = "SELECT name, count FROM voters ORDER BY name ASC";

/// Get the record for a voter name, or `None` if the name has never voted.
pub async fn get_voter(db: &Database, name: &str) -> Result<Option<VoterRecord>, TallyError> {
    info!(sql = GET_VOTER_SQL, voter = name, "querying voter");
    let name = name.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(GET_VOTER_SQL)?;
            let result = stmt.query_row(params![name], |row| {
                Ok(VoterRecord {
                    name: row.get(0)?,
                    count: row.get(1)?,
                })
            });
            match result {
                Ok(record) => Ok(Some(record)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Insert a new voter record.
pub async fn insert_voter(db: &Database, record: &VoterRecord) -> Result<(), TallyError> {
    info!(
        sql = INSERT_VOTER_SQL,
        voter = record.name.as_str(),
        count = record.count,
        "inserting voter"
    );
    let record = record.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(INSERT_VOTER_SQL, params![record.name, record.count])?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Set a voter's count to a new value.
pub async fn update_count(db: &Database, name: &str, count: i64) -> Result<(), TallyError> {
    info!(sql = UPDATE_COUNT_SQL, voter = name, count, "updating count");
    let name = name.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(UPDATE_COUNT_SQL, params![count, name])?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// List every voter record, ordered by name.
pub async fn list_voters(db: &Database) -> Result<Vec<VoterRecord>, TallyError> {
    info!(sql = LIST_VOTERS_SQL, "listing voters");
    db.connection()
        .call(|conn| {
            let mut stmt = conn.prepare(LIST_VOTERS_SQL)?;
            let rows = stmt.query_map([], |row| {
                Ok(VoterRecord {
                    name: row.get(0)?,
                    count: row.get(1)?,
                })
            })?;
            let mut voters = Vec::new();
            for row in rows {
                voters.push(row?);
            }
            Ok(voters)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        (db, dir)
    }

    #[tokio::test]
    async fn insert_and_get_voter_round_trips() {
        let (db, _dir) = setup_db().await;
        let record = VoterRecord {
            name: "alice".to_string(),
            count: 1,
        };

        insert_voter(&db, &record).await.unwrap();
        let retrieved = get_voter(&db, "alice").await.unwrap();
        assert_eq!(retrieved, Some(record));

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn get_unknown_voter_returns_none() {
        let (db, _dir) = setup_db().await;
        let result = get_voter(&db, "nobody").await.unwrap();
        assert!(result.is_none());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn update_count_changes_only_that_voter() {
        let (db, _dir) = setup_db().await;
        insert_voter(
            &db,
            &VoterRecord {
                name: "alice".to_string(),
                count: 5,
            },
        )
        .await
        .unwrap();
        insert_voter(
            &db,
            &VoterRecord {
                name: "bob".to_string(),
                count: 2,
            },
        )
        .await
        .unwrap();

        update_count(&db, "alice", 6).await.unwrap();

        let alice = get_voter(&db, "alice").await.unwrap().unwrap();
        let bob = get_voter(&db, "bob").await.unwrap().unwrap();
        assert_eq!(alice.count, 6);
        assert_eq!(bob.count, 2);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn list_voters_orders_by_name() {
        let (db, _dir) = setup_db().await;
        for (name, count) in [("carol", 3), ("alice", 1), ("bob", 2)] {
            insert_voter(
                &db,
                &VoterRecord {
                    name: name.to_string(),
                    count,
                },
            )
            .await
            .unwrap();
        }

        let voters = list_voters(&db).await.unwrap();
        let names: Vec<&str> = voters.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob", "carol"]);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn list_voters_empty_store() {
        let (db, _dir) = setup_db().await;
        let voters = list_voters(&db).await.unwrap();
        assert!(voters.is_empty());
        db.close().await.unwrap();
    }
}
