// SPDX-FileCopyrightText: 2026 Tally Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `tally vote` command implementation.
//!
//! Opens the store (creating the schema if absent), records one vote for
//! the given name, and prints the new count. A schema or connection failure
//! here is fatal; the caller reports it and exits non-zero.

use tally_config::TallyConfig;
use tally_core::{TallyError, VoteStore};
use tally_storage::SqliteVoteStore;

/// Voter used when the command line names nobody.
pub const DEFAULT_VOTER: &str = "john doe";

/// Runs the `tally vote` command. Returns the new count for the voter.
pub async fn run_vote(config: &TallyConfig, name: &str) -> Result<i64, TallyError> {
    let store = SqliteVoteStore::new(config.storage.clone());
    store.initialize().await?;

    let count = store.vote(name).await?;
    println!("New vote for {} is {}", display_name(name), count);

    store.close().await?;
    Ok(count)
}

/// Title-case a voter name for display: "john doe" -> "John Doe".
fn display_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn make_config(path: &str) -> TallyConfig {
        let mut config = TallyConfig::default();
        config.storage.database_path = path.to_string();
        config
    }

    #[test]
    fn display_name_title_cases_words() {
        assert_eq!(display_name("john doe"), "John Doe");
        assert_eq!(display_name("alice"), "Alice");
        assert_eq!(display_name("JOHN doe"), "JOHN Doe");
        assert_eq!(display_name("  john   doe  "), "John Doe");
    }

    #[tokio::test]
    async fn run_vote_counts_up_across_invocations() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("vote_cmd.db");
        let config = make_config(db_path.to_str().unwrap());

        assert_eq!(run_vote(&config, DEFAULT_VOTER).await.unwrap(), 1);
        assert_eq!(run_vote(&config, DEFAULT_VOTER).await.unwrap(), 2);
        assert_eq!(run_vote(&config, "alice").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn run_vote_fails_on_unusable_database_path() {
        let dir = tempdir().unwrap();
        // A directory where the database file should be.
        let config = make_config(dir.path().to_str().unwrap());
        assert!(run_vote(&config, "alice").await.is_err());
    }
}
