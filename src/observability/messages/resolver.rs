// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for dependency name resolution events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// A declared dependency name matched no resolution strategy.
///
/// The dependent still builds; it receives a synthesized stand-in under
/// this name.
///
/// # Log Level
/// `warn!` - Likely a typo or a missing registration
pub struct UnresolvedDependency<'a> {
    pub module: &'a str,
    pub dependency: &'a str,
}

impl Display for UnresolvedDependency<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Module '{}' declares dependency '{}' which resolves to nothing",
            self.module, self.dependency
        )
    }
}

impl StructuredLog for UnresolvedDependency<'_> {
    fn log(&self) {
        tracing::warn!(
            module = self.module,
            dependency = self.dependency,
            "{}", self
        );
    }
}

/// A caller asked for a name that no resolution strategy could map to a
/// registered module.
///
/// # Log Level
/// `warn!` - The caller receives a fallback stand-in
pub struct UnknownModuleRequested<'a> {
    pub module: &'a str,
}

impl Display for UnknownModuleRequested<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Requested module '{}' is not registered; serving a fallback stand-in",
            self.module
        )
    }
}

impl StructuredLog for UnknownModuleRequested<'_> {
    fn log(&self) {
        tracing::warn!(module = self.module, "{}", self);
    }
}
