// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The exports surface a module presents to its dependents.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use crate::traits::capability::{KeyValue, Logging, RequestHandling};

/// Opaque exports object produced by a module factory.
///
/// The engine never inspects exports beyond this trait: it stores them,
/// hands them to dependents, and (after bootstrap) invokes the optional
/// startup hook. Dependents reach concrete types through [`Exports::as_any`]
/// or through the capability accessors.
pub trait Exports: Send + Sync {
    /// Downcast hook so dependents can reach the concrete exports type.
    fn as_any(&self) -> &dyn Any;

    /// Optional startup hook, run once after every module has reached a
    /// terminal status. `None` means the module declares no hook and the
    /// lifecycle runner skips it.
    fn init(&self) -> Option<anyhow::Result<()>> {
        None
    }

    /// Whether this object is a synthesized stand-in rather than the real
    /// module exports.
    fn is_fallback(&self) -> bool {
        false
    }

    /// Readiness query. Stand-ins report `false`.
    fn is_ready(&self) -> bool {
        !self.is_fallback()
    }

    fn logging(&self) -> Option<&dyn Logging> {
        None
    }

    fn request_handling(&self) -> Option<&dyn RequestHandling> {
        None
    }

    fn key_value(&self) -> Option<&dyn KeyValue> {
        None
    }
}

/// Dependency exports handed to a factory, keyed by the name the module
/// declared them under (short alias or full dotted name).
#[derive(Default, Clone)]
pub struct ResolvedExports {
    entries: HashMap<String, Arc<dyn Exports>>,
}

impl ResolvedExports {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, exports: Arc<dyn Exports>) {
        self.entries.insert(name.into(), exports);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Exports>> {
        self.entries.get(name)
    }

    /// Returns the named dependency, or a synthesized stand-in when the
    /// orchestrator supplied nothing under that name. Factories can rely
    /// on every declared dependency being callable.
    pub fn require(&self, name: &str) -> Arc<dyn Exports> {
        match self.entries.get(name) {
            Some(exports) => Arc::clone(exports),
            None => crate::fallback::FallbackModule::synthesize(
                name,
                crate::fallback::FallbackReason::Unresolved,
            ),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
