// SPDX-FileCopyrightText: 2026 Tally Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the tally vote counter.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level tally configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TallyConfig {
    /// Identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the tool instance.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "tally".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("tally").join("tally.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("tally.db"))
        .to_string_lossy()
        .into_owned()
}

fn default_wal_mode() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = TallyConfig::default();
        assert_eq!(config.agent.name, "tally");
        assert_eq!(config.agent.log_level, "info");
        assert!(config.storage.wal_mode);
        assert!(config.storage.database_path.ends_with("tally.db"));
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[storage]
database_path = "/tmp/votes.db"
"#;
        let config: TallyConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.storage.database_path, "/tmp/votes.db");
        assert!(config.storage.wal_mode, "unset keys take their defaults");
        assert_eq!(config.agent.name, "tally");
    }

    #[test]
    fn unknown_top_level_section_is_rejected() {
        let toml_str = r#"
[databse]
path = "/tmp/votes.db"
"#;
        assert!(toml::from_str::<TallyConfig>(toml_str).is_err());
    }

    #[test]
    fn unknown_key_in_section_is_rejected() {
        let toml_str = r#"
[agent]
naem = "tally"
"#;
        assert!(toml::from_str::<TallyConfig>(toml_str).is_err());
    }
}
