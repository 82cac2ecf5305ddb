// SPDX-FileCopyrightText: 2026 Taskroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./taskroute.toml` > `~/.config/taskroute/taskroute.toml` >
//! `/etc/taskroute/taskroute.toml` with environment variable overrides via `TASKROUTE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::TaskrouteConfig;

/// Local config file name, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "taskroute.toml";

/// System-wide config file path.
pub const SYSTEM_CONFIG_FILE: &str = "/etc/taskroute/taskroute.toml";

/// Top-level sections recognised by the env var mapper.
const ENV_SECTIONS: &[&str] = &["model", "logging", "routing"];

/// Path of the per-user config file, if a config dir exists on this platform.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("taskroute").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/taskroute/taskroute.toml` (system-wide)
/// 3. `~/.config/taskroute/taskroute.toml` (user XDG config)
/// 4. `./taskroute.toml` (local directory)
/// 5. `TASKROUTE_*` environment variables
pub fn load_config() -> Result<TaskrouteConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and by file-backed config sources that re-read on demand.
pub fn load_config_from_str(toml_content: &str) -> Result<TaskrouteConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TaskrouteConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<TaskrouteConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TaskrouteConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(TaskrouteConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_FILE))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")`: `TASKROUTE_MODEL_DEFAULT_MODEL` must
/// map to `model.default_model`, not `model.default.model`.
fn env_provider() -> Env {
    Env::prefixed("TASKROUTE_").map(|key| map_env_key(key.as_str()).into())
}

/// Map a lowercased, prefix-stripped env var name to a dotted config path.
fn map_env_key(key: &str) -> String {
    for section in ENV_SECTIONS {
        if let Some(rest) = key
            .strip_prefix(section)
            .and_then(|r| r.strip_prefix('_'))
        {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}
