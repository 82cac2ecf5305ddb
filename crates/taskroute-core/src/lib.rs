// SPDX-FileCopyrightText: 2026 Taskroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for taskroute.
//!
//! This crate provides the error type, the data model shared by the
//! classifier and router, and the collaborator traits through which the
//! router reads its environment.

pub mod error;
pub mod traits;
pub mod types;

pub use error::TaskrouteError;
pub use traits::{DefaultModelSource, RoutingConfigSource};
pub use types::{
    EXPLICIT_REASONING, PredefinedTaskType, RoutingDecision, TaskClassification, TaskTypeMetadata,
};

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use taskroute_config::RoutingConfig;

    use super::*;

    struct Fixed(Option<RoutingConfig>);

    #[async_trait]
    impl RoutingConfigSource for Fixed {
        async fn routing_config(&self) -> Result<Option<RoutingConfig>, TaskrouteError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn error_variants_display() {
        let config = TaskrouteError::Config("bad".into());
        assert_eq!(config.to_string(), "configuration error: bad");

        let timeout = TaskrouteError::Timeout {
            duration: std::time::Duration::from_millis(250),
        };
        assert!(timeout.to_string().contains("250ms"));

        let source = TaskrouteError::config_source("read failed", std::io::Error::other("denied"));
        assert_eq!(source.to_string(), "config source error: read failed");
        assert!(std::error::Error::source(&source).is_some());
    }

    #[tokio::test]
    async fn arc_forwards_config_source() {
        let source: Arc<dyn RoutingConfigSource> =
            Arc::new(Fixed(Some(RoutingConfig::default())));
        let snapshot = source.routing_config().await.unwrap();
        assert_eq!(snapshot, Some(RoutingConfig::default()));
    }

    #[test]
    fn string_is_a_default_model_source() {
        let source: Arc<dyn DefaultModelSource> = Arc::new("gpt-4o-mini".to_string());
        assert_eq!(source.default_model(), "gpt-4o-mini");
    }
}
