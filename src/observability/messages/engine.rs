// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for build orchestration lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Whole-system build passes (start, completion)
//! * Per-module construction outcomes
//! * Cycle detection and isolation

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// A full build pass over every registered module began.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use modulith::observability::messages::engine::BuildAllStarted;
///
/// let msg = BuildAllStarted { module_count: 12 };
///
/// tracing::info!("{}", msg);
/// ```
pub struct BuildAllStarted {
    pub module_count: usize,
}

impl Display for BuildAllStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Building all {} registered modules",
            self.module_count
        )
    }
}

impl StructuredLog for BuildAllStarted {
    fn log(&self) {
        tracing::info!(module_count = self.module_count, "{}", self);
    }
}

/// A full build pass finished; every registered module is now terminal.
///
/// # Log Level
/// `info!` - Important operational event
pub struct BuildAllCompleted {
    pub ready: usize,
    pub fallback: usize,
}

impl Display for BuildAllCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Build pass complete: {} ready, {} degraded to fallback",
            self.ready, self.fallback
        )
    }
}

impl StructuredLog for BuildAllCompleted {
    fn log(&self) {
        tracing::info!(ready = self.ready, fallback = self.fallback, "{}", self);
    }
}

/// One module's factory ran and returned real exports.
///
/// # Log Level
/// `debug!` - High-volume per-module event
pub struct ModuleBuilt<'a> {
    pub module: &'a str,
    pub dependency_count: usize,
}

impl Display for ModuleBuilt<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Built module '{}' with {} resolved dependencies",
            self.module, self.dependency_count
        )
    }
}

impl StructuredLog for ModuleBuilt<'_> {
    fn log(&self) {
        tracing::debug!(
            module = self.module,
            dependency_count = self.dependency_count,
            "{}", self
        );
    }
}

/// One module's factory returned an error; the module degrades to a
/// fallback stand-in.
///
/// # Log Level
/// `warn!` - The system continues with reduced capability
pub struct FactoryFailed<'a> {
    pub module: &'a str,
    pub error: &'a anyhow::Error,
}

impl Display for FactoryFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Factory for module '{}' failed: {}; degrading to fallback",
            self.module, self.error
        )
    }
}

impl StructuredLog for FactoryFailed<'_> {
    fn log(&self) {
        tracing::warn!(module = self.module, error = %self.error, "{}", self);
    }
}

/// A dependency cycle was detected at build time; every member degrades
/// to a fallback stand-in without its factory running.
///
/// # Log Level
/// `warn!` - Structural defect, isolated rather than fatal
pub struct CycleIsolated<'a> {
    pub cycle: &'a [String],
}

impl Display for CycleIsolated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Dependency cycle isolated: {}",
            self.cycle.join(" -> ")
        )
    }
}

impl StructuredLog for CycleIsolated<'_> {
    fn log(&self) {
        tracing::warn!(cycle = self.cycle.join(" -> "), "{}", self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_message_renders_full_path() {
        let cycle = vec!["A".to_string(), "B".to_string(), "A".to_string()];
        let msg = CycleIsolated { cycle: &cycle };
        assert_eq!(msg.to_string(), "Dependency cycle isolated: A -> B -> A");
    }

    #[test]
    fn factory_failed_carries_error_text() {
        let error = anyhow::anyhow!("no credentials");
        let msg = FactoryFailed {
            module: "System.AI",
            error: &error,
        };
        assert!(msg.to_string().contains("no credentials"));
    }
}
