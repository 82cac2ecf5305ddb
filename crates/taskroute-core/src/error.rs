// SPDX-FileCopyrightText: 2026 Taskroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for taskroute.

use thiserror::Error;

/// The primary error type used across taskroute collaborator traits and routing.
///
/// Classification and matching never fail; every variant here originates in
/// the environment that supplies configuration.
#[derive(Debug, Error)]
pub enum TaskrouteError {
    /// Configuration could not be parsed or failed validation.
    #[error("configuration error: {0}")]
    Config(String),

    /// The configuration source failed to produce a snapshot (I/O, remote fetch).
    #[error("config source error: {message}")]
    ConfigSource {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Config retrieval did not complete in time.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl TaskrouteError {
    /// Wrap an underlying error raised while fetching configuration.
    pub fn config_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ConfigSource {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
