// SPDX-FileCopyrightText: 2026 Tally Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across the store trait and the tally binary.

use serde::{Deserialize, Serialize};

/// The per-name stored tuple of voter name and vote count.
///
/// Created with `count = 1` the first time a name is voted for, incremented
/// on every later vote, never deleted by this system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterRecord {
    /// Voter name, the lookup key. No uniqueness constraint is enforced
    /// at the schema level; see the migration for the rationale.
    pub name: String,
    /// Number of votes recorded for this name. Always >= 1 once stored.
    pub count: i64,
}

/// Health status reported by store health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Store is fully operational.
    Healthy,
    /// Store is operational but experiencing issues.
    Degraded(String),
    /// Store is not operational.
    Unhealthy(String),
}
