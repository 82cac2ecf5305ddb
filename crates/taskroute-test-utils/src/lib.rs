// SPDX-FileCopyrightText: 2026 Taskroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for taskroute.
//!
//! Provides scripted collaborators and config fixtures so router tests run
//! deterministically without a configuration backend.

pub mod fixtures;
pub mod mock_source;

pub use fixtures::{full_preference_table, routing_table};
pub use mock_source::{MockConfigSource, MockModelSource};
