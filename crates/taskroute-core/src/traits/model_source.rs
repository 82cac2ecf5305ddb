// SPDX-FileCopyrightText: 2026 Taskroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default model source trait.

use std::sync::Arc;

/// Supplies the model callers use when routing resolves nothing.
pub trait DefaultModelSource: Send + Sync {
    /// The currently configured default model. Infallible.
    fn default_model(&self) -> String;
}

impl<T: DefaultModelSource + ?Sized> DefaultModelSource for Arc<T> {
    fn default_model(&self) -> String {
        (**self).default_model()
    }
}

impl DefaultModelSource for String {
    fn default_model(&self) -> String {
        self.clone()
    }
}
