// SPDX-FileCopyrightText: 2026 Taskroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted configuration and model sources for deterministic testing.
//!
//! `MockConfigSource` pops pre-configured results from a FIFO queue. When
//! the queue is empty it repeats its fallback snapshot.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use taskroute_config::RoutingConfig;
use taskroute_core::{DefaultModelSource, RoutingConfigSource, TaskrouteError};
use tokio::sync::Mutex;

/// One scripted response.
#[derive(Debug, Clone)]
enum Scripted {
    Snapshot(Option<RoutingConfig>),
    Failure(String),
}

/// A config source returning scripted snapshots or failures.
pub struct MockConfigSource {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    fallback: Option<RoutingConfig>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockConfigSource {
    /// A source that always returns `routing`.
    pub fn new(routing: Option<RoutingConfig>) -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::new())),
            fallback: routing,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// A source whose next call fails with `message`, then returns `None`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::from([Scripted::Failure(message.into())]))),
            ..Self::new(None)
        }
    }

    /// Sleep for `delay` before answering each call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queue a snapshot for the next unscripted call.
    pub async fn push_snapshot(&self, routing: Option<RoutingConfig>) {
        self.script.lock().await.push_back(Scripted::Snapshot(routing));
    }

    /// Queue a failure for the next unscripted call.
    pub async fn push_failure(&self, message: impl Into<String>) {
        self.script
            .lock()
            .await
            .push_back(Scripted::Failure(message.into()));
    }

    /// Number of `routing_config` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RoutingConfigSource for MockConfigSource {
    async fn routing_config(&self) -> Result<Option<RoutingConfig>, TaskrouteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let next = self.script.lock().await.pop_front();
        match next {
            Some(Scripted::Snapshot(routing)) => Ok(routing),
            Some(Scripted::Failure(message)) => Err(TaskrouteError::ConfigSource {
                message,
                source: None,
            }),
            None => Ok(self.fallback.clone()),
        }
    }
}

/// A default-model source with a fixed answer and a call counter.
pub struct MockModelSource {
    model: String,
    calls: AtomicUsize,
}

impl MockModelSource {
    /// Always answer `model`.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `default_model` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DefaultModelSource for MockModelSource {
    fn default_model(&self) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.model.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::routing_table;

    #[tokio::test]
    async fn script_is_consumed_before_fallback() {
        let source = MockConfigSource::new(Some(routing_table(&[("a", "m")])));
        source.push_snapshot(None).await;
        source.push_failure("boom").await;

        assert_eq!(source.routing_config().await.unwrap(), None);
        assert!(source.routing_config().await.is_err());
        assert!(source.routing_config().await.unwrap().is_some());
        assert_eq!(source.calls(), 3);
    }

    #[tokio::test]
    async fn failing_source_fails_once() {
        let source = MockConfigSource::failing("disk unplugged");
        let err = source.routing_config().await.unwrap_err();
        assert_eq!(err.to_string(), "config source error: disk unplugged");
        assert_eq!(source.routing_config().await.unwrap(), None);
    }

    #[test]
    fn model_source_counts_calls() {
        let source = MockModelSource::new("fallback");
        assert_eq!(source.default_model(), "fallback");
        assert_eq!(source.calls(), 1);
    }
}
