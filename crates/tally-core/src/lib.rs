// SPDX-FileCopyrightText: 2026 Tally Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the tally vote counter.
//!
//! This crate provides the foundational trait definition, error type, and
//! common types used throughout the tally workspace. Storage backends
//! implement the [`VoteStore`] trait defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::TallyError;
pub use traits::VoteStore;
pub use types::{HealthStatus, VoterRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_error_has_all_variants() {
        let _config = TallyError::Config("test".into());
        let _storage = TallyError::Storage {
            source: Box::new(std::io::Error::other("test")),
        };
        let _internal = TallyError::Internal("test".into());
    }

    #[test]
    fn error_display_includes_source() {
        let err = TallyError::Storage {
            source: Box::new(std::io::Error::other("disk on fire")),
        };
        assert_eq!(err.to_string(), "storage error: disk on fire");
    }

    #[test]
    fn voter_record_serialization_round_trips() {
        let record = VoterRecord {
            name: "john doe".to_string(),
            count: 3,
        };
        let json = serde_json::to_string(&record).expect("should serialize");
        let parsed: VoterRecord = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(record, parsed);
    }

    #[test]
    fn health_status_variants() {
        let healthy = HealthStatus::Healthy;
        let degraded = HealthStatus::Degraded("slow".into());
        let unhealthy = HealthStatus::Unhealthy("down".into());

        assert_eq!(healthy, HealthStatus::Healthy);
        assert_ne!(degraded, healthy);
        assert_ne!(unhealthy, healthy);
    }

    #[test]
    fn vote_store_trait_is_object_safe() {
        // If VoteStore stops being object safe this won't compile.
        fn _assert(_store: &dyn VoteStore) {}
    }
}
