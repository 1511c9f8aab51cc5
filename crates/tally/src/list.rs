// SPDX-FileCopyrightText: 2026 Tally Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `tally list` command implementation.
//!
//! Prints every voter record in the store, one per line, ordered by name.

use tally_config::TallyConfig;
use tally_core::{TallyError, VoteStore};
use tally_storage::SqliteVoteStore;

/// Runs the `tally list` command.
pub async fn run_list(config: &TallyConfig) -> Result<(), TallyError> {
    let store = SqliteVoteStore::new(config.storage.clone());
    store.initialize().await?;

    let voters = store.list_voters().await?;
    if voters.is_empty() {
        println!("no votes recorded");
    } else {
        for voter in &voters {
            println!("{:<24} {}", voter.name, voter.count);
        }
    }

    store.close().await?;
    Ok(())
}
