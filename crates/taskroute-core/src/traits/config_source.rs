// SPDX-FileCopyrightText: 2026 Taskroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Routing configuration source trait.

use std::sync::Arc;

use async_trait::async_trait;
use taskroute_config::RoutingConfig;

use crate::error::TaskrouteError;

/// Supplies the current routing table.
///
/// Each call returns an owned snapshot; the router treats it as immutable
/// for the duration of one decision even if the backing store changes
/// between calls.
#[async_trait]
pub trait RoutingConfigSource: Send + Sync {
    /// Fetch the current routing table. `Ok(None)` means routing is not configured.
    ///
    /// Errors are infrastructure faults and must not be mapped to `Ok(None)`.
    async fn routing_config(&self) -> Result<Option<RoutingConfig>, TaskrouteError>;
}

#[async_trait]
impl<T: RoutingConfigSource + ?Sized> RoutingConfigSource for Arc<T> {
    async fn routing_config(&self) -> Result<Option<RoutingConfig>, TaskrouteError> {
        (**self).routing_config().await
    }
}
