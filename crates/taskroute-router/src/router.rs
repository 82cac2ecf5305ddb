// SPDX-FileCopyrightText: 2026 Taskroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request routing: explicit override > classify > match preferences.
//!
//! The router reads one routing table snapshot per call from its
//! [`RoutingConfigSource`] and never caches decisions.

use std::sync::Arc;
use std::time::Duration;

use taskroute_config::RoutingConfig;
use taskroute_core::{
    DefaultModelSource, RoutingConfigSource, RoutingDecision, TaskClassification, TaskTypeMetadata,
    TaskrouteError,
};
use tracing::debug;

use crate::classifier::TaskClassifier;
use crate::preferences::RoutingPreferences;
use crate::taxonomy;

/// Task type reported when routing is short-circuited before classification.
pub const UNKNOWN_TASK_TYPE: &str = "unknown";

/// Reason reported when routing is absent or disabled at the router level.
pub const ROUTING_NOT_ENABLED_REASON: &str = "Model routing is not enabled";

/// Composes the classifier and preference matcher over an injected environment.
pub struct Router {
    classifier: TaskClassifier,
    config_source: Arc<dyn RoutingConfigSource>,
    model_source: Arc<dyn DefaultModelSource>,
    config_timeout: Option<Duration>,
}

impl Router {
    /// Create a router reading its table from `config_source` and its
    /// fallback model from `model_source`.
    pub fn new(
        config_source: Arc<dyn RoutingConfigSource>,
        model_source: Arc<dyn DefaultModelSource>,
    ) -> Self {
        Self {
            classifier: TaskClassifier::new(),
            config_source,
            model_source,
            config_timeout: None,
        }
    }

    /// Fail any call whose config retrieval takes longer than `timeout`.
    pub fn with_config_timeout(mut self, timeout: Duration) -> Self {
        self.config_timeout = Some(timeout);
        self
    }

    /// The classifier used for non-explicit requests.
    pub fn classifier(&self) -> &TaskClassifier {
        &self.classifier
    }

    /// Route a request to a model.
    ///
    /// An explicit task type bypasses classification and is matched verbatim
    /// at full confidence; a blank one counts as absent. When routing is absent or disabled the
    /// call short-circuits without classifying. Config source failures are
    /// returned as errors, never as a "no preference" decision.
    pub async fn route_request(
        &self,
        user_input: &str,
        explicit_task_type: Option<&str>,
    ) -> Result<RoutingDecision, TaskrouteError> {
        let Some(config) = self.current_config().await?.filter(|c| c.enabled) else {
            debug!("routing not enabled, skipping classification");
            return Ok(RoutingDecision {
                model: None,
                task_type: UNKNOWN_TASK_TYPE.to_string(),
                confidence: 0.0,
                reason: ROUTING_NOT_ENABLED_REASON.to_string(),
                is_explicit: false,
            });
        };

        let preferences = RoutingPreferences::new(config);
        let explicit = explicit_task_type.filter(|t| !t.trim().is_empty());

        let decision = match explicit {
            Some(task_type) => {
                preferences.make_decision(&TaskClassification::explicit(task_type), true)
            }
            None => {
                let classification = self.classifier.classify(user_input);
                preferences.make_decision(&classification, false)
            }
        };

        debug!(
            task_type = decision.task_type.as_str(),
            confidence = decision.confidence,
            model = decision.model.as_deref().unwrap_or("<default>"),
            explicit = decision.is_explicit,
            "routing decision"
        );

        Ok(decision)
    }

    /// Route a raw user message, honouring a leading `/task <id>` override.
    pub async fn route_message(&self, message: &str) -> Result<RoutingDecision, TaskrouteError> {
        let (explicit, text) = parse_task_override(message);
        self.route_request(text, explicit).await
    }

    /// Predefined task types followed by operator-defined ones from the
    /// current table (whether or not it is enabled).
    pub async fn available_task_types(&self) -> Result<Vec<TaskTypeMetadata>, TaskrouteError> {
        let config = self.current_config().await?;
        Ok(taxonomy::available_task_types(config.as_ref()))
    }

    /// Metadata for one task type, predefined or operator-defined.
    pub fn task_type_metadata(&self, task_type: &str) -> TaskTypeMetadata {
        taxonomy::metadata_for(task_type)
    }

    /// Whether `model` can be routed to. Only checks that it is non-empty.
    pub fn is_model_available(&self, model: &str) -> bool {
        !model.is_empty()
    }

    /// The environment's default model.
    ///
    /// The task type is accepted for interface symmetry and currently ignored:
    /// every task type falls back to the same model.
    pub fn fallback_model(&self, _task_type: &str) -> String {
        self.model_source.default_model()
    }

    async fn current_config(&self) -> Result<Option<RoutingConfig>, TaskrouteError> {
        let fetch = self.config_source.routing_config();
        match self.config_timeout {
            Some(duration) => tokio::time::timeout(duration, fetch)
                .await
                .map_err(|_| TaskrouteError::Timeout { duration })?,
            None => fetch.await,
        }
    }
}

/// Parse an explicit task-type prefix from user input.
///
/// Supports `/task <id> ` and `/task:<id> ` prefixes. Returns
/// `(Some(id), rest_of_message)` when an override is present, or
/// `(None, original_message)` otherwise. Ids are not checked against the
/// taxonomy since operators may define their own.
pub fn parse_task_override(text: &str) -> (Option<&str>, &str) {
    let trimmed = text.trim_start();
    let rest = if let Some(rest) = trimmed.strip_prefix("/task:") {
        rest
    } else if let Some(rest) = trimmed.strip_prefix("/task ") {
        rest.trim_start()
    } else {
        return (None, text);
    };

    let (id, remainder) = match rest.split_once(char::is_whitespace) {
        Some((id, remainder)) => (id, remainder.trim_start()),
        None => (rest, ""),
    };

    if id.is_empty() {
        (None, text)
    } else {
        (Some(id), remainder)
    }
}
