// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::traits::{Exports, ResolvedExports};

/// Constructor for a module's exports.
///
/// Receives the resolved exports of every declared dependency, keyed by
/// the names the module declared them under. A factory runs at most once
/// per process lifetime; an `Err` converts the module to fallback status.
pub type Factory =
    Box<dyn Fn(&ResolvedExports) -> anyhow::Result<Arc<dyn Exports>> + Send + Sync>;

/// A registered module: its dotted name, explicit dependency names, and
/// the factory that constructs its exports.
///
/// Descriptors are created at registration time and read-only during the
/// build phase. Dependency names may be short aliases; resolution happens
/// later, so forward references to not-yet-registered modules are fine.
pub struct ModuleDescriptor {
    pub name: String,
    pub dependencies: Vec<String>,
    pub factory: Factory,
}

impl ModuleDescriptor {
    pub fn new(
        name: impl Into<String>,
        dependencies: Vec<String>,
        factory: Factory,
    ) -> Self {
        Self {
            name: name.into(),
            dependencies,
            factory,
        }
    }
}

impl std::fmt::Debug for ModuleDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleDescriptor")
            .field("name", &self.name)
            .field("dependencies", &self.dependencies)
            .finish_non_exhaustive()
    }
}
