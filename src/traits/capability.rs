// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Capability interfaces modules may expose through their exports.
//!
//! Rather than letting every module invent its own surface, commonly
//! consumed behavior is expressed as a small family of interfaces. A
//! dependent asks the exports object for a capability and receives either
//! the module's real implementation or `None`. The fallback synthesizer
//! provides one canonical no-op implementation of every interface, so a
//! degraded module still answers each of these calls safely.

use serde::Serialize;

/// Logger-like capability: diagnostic output and event tracking.
pub trait Logging: Send + Sync {
    fn log(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);

    /// Record a named event. Telemetry-style modules implement this;
    /// the no-op variant reports the event as untracked.
    fn track(&self, event: &str);
}

/// Request-handler-like capability: structured request/response exchange.
pub trait RequestHandling: Send + Sync {
    fn handle(&self, request: &serde_json::Value) -> CapabilityResponse;

    /// Free-form query variant used by conversational modules.
    fn ask(&self, prompt: &str) -> CapabilityResponse;
}

/// Key/value-like capability: simple shared state access.
pub trait KeyValue: Send + Sync {
    fn get(&self, key: &str) -> Option<serde_json::Value>;

    /// Returns whether the value was accepted.
    fn set(&self, key: &str, value: serde_json::Value) -> bool;
}

/// Response envelope returned by [`RequestHandling`] implementations.
///
/// Responses from synthesized stand-ins carry `fallback: true` so callers
/// can distinguish a benign sentinel from a real answer without ever
/// receiving a missing value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapabilityResponse {
    pub fallback: bool,
    pub module: String,
    pub body: serde_json::Value,
}

impl CapabilityResponse {
    /// A real answer produced by a live module.
    pub fn answer(module: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            fallback: false,
            module: module.into(),
            body,
        }
    }

    /// The tagged sentinel a stand-in returns for any request.
    pub fn unavailable(module: impl Into<String>) -> Self {
        let module = module.into();
        let body = serde_json::json!({
            "type": "error",
            "text": format!("module '{}' is unavailable", module),
        });
        Self {
            fallback: true,
            module,
            body,
        }
    }
}
