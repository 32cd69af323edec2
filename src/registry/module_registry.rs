// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The module registry: a pure data holder for module declarations.

use std::collections::HashMap;

use crate::observability::messages::registry::{DuplicateRegistration, ModuleRegistered};
use crate::observability::messages::StructuredLog;
use crate::registry::{Factory, ModuleDescriptor};

/// Mapping from dotted module name to its descriptor.
///
/// Registering the same name twice overwrites the previous descriptor and
/// logs a warning (last write wins); modules may legitimately be
/// re-declared during iterative development. No validation happens here:
/// dependencies may reference not-yet-registered names, and resolution is
/// deferred to build time.
///
/// Registration order is preserved so `build_all` and diagnostics iterate
/// deterministically.
#[derive(Default)]
pub struct ModuleRegistry {
    modules: HashMap<String, ModuleDescriptor>,
    order: Vec<String>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a module declaration.
    pub fn register(&mut self, name: &str, dependencies: &[&str], factory: Factory) {
        let descriptor = ModuleDescriptor::new(
            name,
            dependencies.iter().map(|d| (*d).to_string()).collect(),
            factory,
        );

        if self.modules.insert(name.to_string(), descriptor).is_some() {
            DuplicateRegistration { module: name }.log();
        } else {
            self.order.push(name.to_string());
            ModuleRegistered {
                module: name,
                dependency_count: dependencies.len(),
            }
            .log();
        }
    }

    pub fn get(&self, name: &str) -> Option<&ModuleDescriptor> {
        self.modules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.order.iter()
    }

    /// Number of distinct names ever registered.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
