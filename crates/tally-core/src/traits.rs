// SPDX-FileCopyrightText: 2026 Tally Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Store trait for vote persistence backends.

use async_trait::async_trait;

use crate::error::TallyError;
use crate::types::{HealthStatus, VoterRecord};

/// Adapter for the embedded relational store holding voter records.
///
/// Implementations manage the lifecycle of the underlying connection and
/// expose the three primitives the vote operation is built from: a
/// row-or-absent lookup, a full listing, and the read-modify-write vote
/// itself.
#[async_trait]
pub trait VoteStore: Send + Sync + 'static {
    /// Initializes the backend: opens the database and applies the schema.
    ///
    /// Idempotent across processes (create-if-absent semantics). A failure
    /// here is fatal to the caller; nothing else can proceed without it.
    async fn initialize(&self) -> Result<(), TallyError>;

    /// Closes the backend, flushing pending writes.
    async fn close(&self) -> Result<(), TallyError>;

    /// Performs a round-trip health check against the store.
    async fn health_check(&self) -> Result<HealthStatus, TallyError>;

    /// Looks up the record for `name`, or `None` if the name has never
    /// been voted for.
    async fn get_voter(&self, name: &str) -> Result<Option<VoterRecord>, TallyError>;

    /// Lists every voter record in the store.
    async fn list_voters(&self) -> Result<Vec<VoterRecord>, TallyError>;

    /// Records one vote for `name` and returns the new count.
    ///
    /// Read-modify-write: the lookup and the insert-or-update are two
    /// independent requests to the store. Concurrent votes for the same
    /// name can interleave between them and lose updates.
    async fn vote(&self, name: &str) -> Result<i64, TallyError>;
}
