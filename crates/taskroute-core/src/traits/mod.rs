// SPDX-FileCopyrightText: 2026 Taskroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator traits the router depends on.
//!
//! Both are supplied at router construction so tests can inject
//! deterministic implementations without a configuration backend.

pub mod config_source;
pub mod model_source;

pub use config_source::RoutingConfigSource;
pub use model_source::DefaultModelSource;
