// SPDX-FileCopyrightText: 2026 Tally Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./tally.toml` > `~/.config/tally/tally.toml` > `/etc/tally/tally.toml`
//! with environment variable overrides via `TALLY_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::TallyConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/tally/tally.toml` (system-wide)
/// 3. `~/.config/tally/tally.toml` (user XDG config)
/// 4. `./tally.toml` (local directory)
/// 5. `TALLY_*` environment variables
pub fn load_config() -> Result<TallyConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TallyConfig::default()))
        .merge(Toml::file("/etc/tally/tally.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("tally/tally.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("tally.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<TallyConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TallyConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<TallyConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TallyConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `TALLY_AGENT_LOG_LEVEL` must map to
/// `agent.log_level`, not `agent.log.level`.
fn env_provider() -> Env {
    Env::prefixed("TALLY_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: TALLY_STORAGE_DATABASE_PATH -> "storage_database_path"
        let mapped = key
            .as_str()
            .replacen("agent_", "agent.", 1)
            .replacen("storage_", "storage.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_overrides_defaults() {
        let config = load_config_from_str(
            r#"
[agent]
log_level = "debug"

[storage]
database_path = "/tmp/loader-test.db"
wal_mode = false
"#,
        )
        .unwrap();
        assert_eq!(config.agent.log_level, "debug");
        assert_eq!(config.storage.database_path, "/tmp/loader-test.db");
        assert!(!config.storage.wal_mode);
    }

    #[test]
    fn empty_str_yields_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.agent.name, "tally");
        assert!(config.storage.wal_mode);
    }

    #[test]
    fn from_str_rejects_unknown_key() {
        let result = load_config_from_str(
            r#"
[storage]
database_pth = "/tmp/typo.db"
"#,
        );
        assert!(result.is_err());
    }
}
