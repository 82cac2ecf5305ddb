// SPDX-FileCopyrightText: 2026 Taskroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Task classification and preference-based model routing.
//!
//! This crate provides:
//! - [`TaskClassifier`]: deterministic heuristic task-type classification
//! - [`RoutingPreferences`]: first-match lookup over an operator routing table
//! - [`Router`]: the entry point composing both over an injected environment
//!
//! Data flows text -> classifier -> classification -> preferences -> decision.
//! A decision without a model tells the caller to use its own default.

pub mod classifier;
pub mod preferences;
pub mod router;
pub mod source;
pub mod taxonomy;

pub use classifier::{ClassificationRule, TaskClassifier, Trigger};
pub use preferences::{RoutingPreferences, confidence_percent};
pub use router::{Router, parse_task_override};
pub use source::{FileConfigSource, LiveConfig, StaticConfigSource};
pub use taxonomy::{PREDEFINED_TASKS, PredefinedTask};
