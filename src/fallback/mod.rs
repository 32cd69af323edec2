// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Fallback synthesis: safe stand-ins for unavailable modules.
//!
//! When a module is requested but unregistered, its factory fails, or it
//! sits on a dependency cycle, the engine hands dependents a synthesized
//! stand-in instead of nothing. The stand-in implements every capability
//! interface with benign no-ops, so a dependent that expects a logger, a
//! request handler, or a key/value store gets callable functions rather
//! than a crash. All responses are clearly tagged as fallback values.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::traits::{CapabilityResponse, Exports, KeyValue, Logging, RequestHandling};

/// Why a stand-in exists, retained for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// The name was never registered.
    Unregistered,
    /// A declared dependency name could not be resolved.
    Unresolved,
    /// The module sits on a dependency cycle; the path is recorded.
    CircularDependency { cycle: Vec<String> },
    /// The module's factory returned an error.
    FactoryFailure { error: String },
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::Unregistered => write!(f, "module is not registered"),
            FallbackReason::Unresolved => write!(f, "dependency name could not be resolved"),
            FallbackReason::CircularDependency { cycle } => {
                write!(f, "circular dependency: {}", cycle.join(" -> "))
            }
            FallbackReason::FactoryFailure { error } => {
                write!(f, "factory failed: {error}")
            }
        }
    }
}

/// The canonical no-op stand-in for an unavailable module.
pub struct FallbackModule {
    name: String,
    reason: FallbackReason,
}

impl FallbackModule {
    /// Produce a stand-in for the named module.
    pub fn synthesize(name: &str, reason: FallbackReason) -> Arc<dyn Exports> {
        tracing::debug!(module = name, reason = %reason, "synthesized fallback stand-in");
        Arc::new(Self {
            name: name.to_string(),
            reason,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reason(&self) -> &FallbackReason {
        &self.reason
    }
}

impl Exports for FallbackModule {
    fn as_any(&self) -> &dyn Any {
        self
    }

    /// A degraded module has nothing to initialize; the hook succeeds so
    /// callers that invoke it directly never observe an error.
    fn init(&self) -> Option<anyhow::Result<()>> {
        Some(Ok(()))
    }

    fn is_fallback(&self) -> bool {
        true
    }

    fn logging(&self) -> Option<&dyn Logging> {
        Some(self)
    }

    fn request_handling(&self) -> Option<&dyn RequestHandling> {
        Some(self)
    }

    fn key_value(&self) -> Option<&dyn KeyValue> {
        Some(self)
    }
}

impl Logging for FallbackModule {
    fn log(&self, message: &str) {
        tracing::info!(module = %self.name, fallback = true, "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(module = %self.name, fallback = true, "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(module = %self.name, fallback = true, "{message}");
    }

    fn track(&self, event: &str) {
        tracing::debug!(module = %self.name, fallback = true, event, "event not tracked");
    }
}

impl RequestHandling for FallbackModule {
    fn handle(&self, _request: &serde_json::Value) -> CapabilityResponse {
        CapabilityResponse::unavailable(&self.name)
    }

    fn ask(&self, _prompt: &str) -> CapabilityResponse {
        CapabilityResponse::unavailable(&self.name)
    }
}

impl KeyValue for FallbackModule {
    fn get(&self, _key: &str) -> Option<serde_json::Value> {
        None
    }

    fn set(&self, _key: &str, _value: serde_json::Value) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stand_in_reports_fallback_condition() {
        let stand_in = FallbackModule::synthesize("System.AI", FallbackReason::Unregistered);
        assert!(stand_in.is_fallback());
        assert!(!stand_in.is_ready());
    }

    #[test]
    fn init_is_callable_and_succeeds() {
        let stand_in = FallbackModule::synthesize("System.AI", FallbackReason::Unregistered);
        let outcome = stand_in.init().expect("fallback exposes a hook");
        assert!(outcome.is_ok());
    }

    #[test]
    fn every_capability_is_present_and_benign() {
        let stand_in = FallbackModule::synthesize(
            "System.Tools",
            FallbackReason::FactoryFailure {
                error: "boom".into(),
            },
        );

        let logging = stand_in.logging().expect("logging capability");
        logging.log("still callable");
        logging.track("ignored.event");

        let handler = stand_in.request_handling().expect("request capability");
        let response = handler.handle(&serde_json::json!({"action": "report"}));
        assert!(response.fallback);
        assert_eq!(response.module, "System.Tools");
        assert!(handler.ask("anything").fallback);

        let store = stand_in.key_value().expect("key/value capability");
        assert_eq!(store.get("missing"), None);
        assert!(store.set("key", serde_json::json!(1)));
    }

    #[test]
    fn reason_is_retained_for_diagnostics() {
        let stand_in = FallbackModule::synthesize(
            "System.Config",
            FallbackReason::CircularDependency {
                cycle: vec!["A".into(), "B".into(), "A".into()],
            },
        );
        let concrete = stand_in
            .as_any()
            .downcast_ref::<FallbackModule>()
            .expect("concrete stand-in");
        assert_eq!(concrete.name(), "System.Config");
        assert_eq!(
            concrete.reason().to_string(),
            "circular dependency: A -> B -> A"
        );
    }
}
