// SPDX-FileCopyrightText: 2026 Taskroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Concrete configuration sources for the router.
//!
//! - [`StaticConfigSource`]: a fixed routing table.
//! - [`LiveConfig`]: a hot-swappable config snapshot shared with a reloader.
//! - [`FileConfigSource`]: re-reads a TOML file on every call.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use arc_swap::ArcSwap;
use async_trait::async_trait;
use taskroute_config::validation::validate_config;
use taskroute_config::{RoutingConfig, TaskrouteConfig, load_config_from_str};
use taskroute_core::{DefaultModelSource, RoutingConfigSource, TaskrouteError};
use tracing::debug;

/// A routing table fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigSource {
    routing: Option<RoutingConfig>,
}

impl StaticConfigSource {
    /// Serve `routing` on every call.
    pub fn new(routing: RoutingConfig) -> Self {
        Self {
            routing: Some(routing),
        }
    }

    /// A source reporting that routing is not configured.
    pub fn absent() -> Self {
        Self { routing: None }
    }
}

#[async_trait]
impl RoutingConfigSource for StaticConfigSource {
    async fn routing_config(&self) -> Result<Option<RoutingConfig>, TaskrouteError> {
        Ok(self.routing.clone())
    }
}

/// A config snapshot that can be replaced while routers are reading it.
///
/// Each routing call loads exactly one snapshot; a concurrent `store` is
/// visible to the next call only.
#[derive(Debug)]
pub struct LiveConfig {
    current: ArcSwap<TaskrouteConfig>,
}

impl LiveConfig {
    /// Start from `config`.
    pub fn new(config: TaskrouteConfig) -> Self {
        Self {
            current: ArcSwap::from_pointee(config),
        }
    }

    /// Replace the current snapshot.
    pub fn store(&self, config: TaskrouteConfig) {
        self.current.store(Arc::new(config));
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<TaskrouteConfig> {
        self.current.load_full()
    }
}

#[async_trait]
impl RoutingConfigSource for LiveConfig {
    async fn routing_config(&self) -> Result<Option<RoutingConfig>, TaskrouteError> {
        Ok(self.current.load().routing.clone())
    }
}

impl DefaultModelSource for LiveConfig {
    fn default_model(&self) -> String {
        self.current.load().model.default_model.clone()
    }
}

/// Reads and validates a TOML config file on every routing call.
///
/// I/O and parse failures fail the call. The default model is taken from the
/// last file that parsed, or the compiled default before the first success.
#[derive(Debug)]
pub struct FileConfigSource {
    path: PathBuf,
    last_default_model: ArcSwap<String>,
}

impl FileConfigSource {
    /// Watch the file at `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_default_model: ArcSwap::from_pointee(
                TaskrouteConfig::default().model.default_model,
            ),
        }
    }

    /// The watched path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read, parse, and validate the file.
    pub async fn load(&self) -> Result<TaskrouteConfig, TaskrouteError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            TaskrouteError::config_source(format!("failed to read {}", self.path.display()), e)
        })?;

        let config = load_config_from_str(&content)
            .map_err(|e| TaskrouteError::Config(format!("{}: {e}", self.path.display())))?;

        validate_config(&config).map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            TaskrouteError::Config(format!("{}: {}", self.path.display(), messages.join("; ")))
        })?;

        self.last_default_model
            .store(Arc::new(config.model.default_model.clone()));
        debug!(path = %self.path.display(), "reloaded routing config");
        Ok(config)
    }
}

#[async_trait]
impl RoutingConfigSource for FileConfigSource {
    async fn routing_config(&self) -> Result<Option<RoutingConfig>, TaskrouteError> {
        Ok(self.load().await?.routing)
    }
}

impl DefaultModelSource for FileConfigSource {
    fn default_model(&self) -> String {
        String::clone(&self.last_default_model.load())
    }
}

#[cfg(test)]
mod tests {
    use taskroute_config::RoutingPreference;

    use super::*;

    #[tokio::test]
    async fn static_source_serves_snapshot() {
        let routing = RoutingConfig::enabled_with(vec![RoutingPreference::new("a", "m")]);
        let source = StaticConfigSource::new(routing.clone());
        assert_eq!(source.routing_config().await.unwrap(), Some(routing));
        assert_eq!(StaticConfigSource::absent().routing_config().await.unwrap(), None);
    }

    #[tokio::test]
    async fn live_config_swaps_between_calls() {
        let live = LiveConfig::new(TaskrouteConfig::default());
        assert_eq!(live.routing_config().await.unwrap(), None);

        let mut next = TaskrouteConfig::default();
        next.model.default_model = "gpt-4o-mini".to_string();
        next.routing = Some(RoutingConfig::enabled_with(vec![]));
        live.store(next);

        assert!(live.routing_config().await.unwrap().unwrap().enabled);
        assert_eq!(live.default_model(), "gpt-4o-mini");
        assert_eq!(live.snapshot().model.default_model, "gpt-4o-mini");
    }

    #[tokio::test]
    async fn missing_file_is_a_source_error() {
        let source = FileConfigSource::new("/nonexistent/taskroute.toml");
        let err = source.routing_config().await.unwrap_err();
        assert!(matches!(err, TaskrouteError::ConfigSource { .. }));
        assert_eq!(source.default_model(), "claude-sonnet-4-20250514");
    }
}
