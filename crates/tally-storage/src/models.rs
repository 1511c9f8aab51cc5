// SPDX-FileCopyrightText: 2026 Tally Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain model types for storage entities.
//!
//! The canonical types are defined in `tally-core::types` for use across
//! the store trait boundary. This module re-exports them for convenience
//! within the storage crate.

pub use tally_core::types::VoterRecord;
