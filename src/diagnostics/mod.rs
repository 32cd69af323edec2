// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! System health reporting and the advisory load-order heuristic.

use serde::Serialize;

use crate::config::consts::{ENTRYPOINT_MARKERS, FOUNDATION_MODULES, SYSTEM_NAMESPACE_PREFIX};
use crate::engine::{BuildState, ModuleStatus};
use crate::registry::ModuleRegistry;

/// Overall verdict derived from the health counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SystemStatus {
    /// Every registered module built for real.
    Healthy,
    /// At least one module runs as a fallback stand-in.
    Degraded,
    /// At least one module is stuck in a non-terminal failure.
    Critical,
}

impl SystemStatus {
    fn from_counts(failed: usize, fallback: usize) -> Self {
        if failed > 0 {
            SystemStatus::Critical
        } else if fallback > 0 {
            SystemStatus::Degraded
        } else {
            SystemStatus::Healthy
        }
    }
}

/// Partition of every registered module by build outcome.
///
/// Serializable so operational tooling can ingest it as JSON. The three
/// buckets list module names, not counts: an operator reading the report
/// needs to see which modules degraded. `failed` lists modules observed
/// in the transient `Failed` state, which a completed build pass always
/// converts to `Fallback`; a nonempty list means the report was taken
/// mid-build or the engine has a bug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub total_registered: usize,
    pub ready: Vec<String>,
    pub fallback: Vec<String>,
    pub failed: Vec<String>,
    pub status: SystemStatus,
}

/// Snapshot the health of every registered module.
///
/// Buckets are filled in registration order. Modules not yet built
/// (`Pending`/`Building`) count toward `total_registered` but appear in
/// no bucket.
pub fn health_report(registry: &ModuleRegistry, state: &BuildState) -> HealthReport {
    let mut ready = Vec::new();
    let mut fallback = Vec::new();
    let mut failed = Vec::new();

    for name in registry.names() {
        match state.status(name) {
            ModuleStatus::Ready => ready.push(name.clone()),
            ModuleStatus::Fallback => fallback.push(name.clone()),
            ModuleStatus::Failed => failed.push(name.clone()),
            ModuleStatus::Pending | ModuleStatus::Building => {}
        }
    }

    HealthReport {
        total_registered: registry.len(),
        status: SystemStatus::from_counts(failed.len(), fallback.len()),
        ready,
        fallback,
        failed,
    }
}

/// Advisory load order from naming conventions, for humans arranging
/// source files or registration calls. The orchestrator never consults
/// this; real ordering comes from the dependency graph.
///
/// Tiers: known foundational modules first (in their canonical order),
/// then remaining system-namespace modules, then feature modules, then
/// bootstrap-style entrypoints last. Alphabetical within a tier.
pub fn suggested_load_order(registry: &ModuleRegistry) -> Vec<String> {
    let mut foundation = Vec::new();
    let mut system = Vec::new();
    let mut feature = Vec::new();
    let mut entrypoints = Vec::new();

    for name in registry.names() {
        if FOUNDATION_MODULES.contains(&name.as_str()) {
            foundation.push(name.clone());
        } else if ENTRYPOINT_MARKERS.iter().any(|marker| name.contains(marker)) {
            entrypoints.push(name.clone());
        } else if name.starts_with(SYSTEM_NAMESPACE_PREFIX) {
            system.push(name.clone());
        } else {
            feature.push(name.clone());
        }
    }

    foundation.sort_by_key(|name| {
        FOUNDATION_MODULES
            .iter()
            .position(|f| *f == name.as_str())
            .unwrap_or(usize::MAX)
    });
    system.sort();
    feature.sort();
    entrypoints.sort();

    foundation
        .into_iter()
        .chain(system)
        .chain(feature)
        .chain(entrypoints)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Factory;
    use crate::traits::Exports;
    use std::any::Any;
    use std::sync::Arc;

    struct Stub;

    impl Exports for Stub {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn stub_factory() -> Factory {
        Box::new(|_| Ok(Arc::new(Stub)))
    }

    fn registry_with(names: &[&str]) -> ModuleRegistry {
        let mut registry = ModuleRegistry::new();
        for name in names {
            registry.register(name, &[], stub_factory());
        }
        registry
    }

    #[test]
    fn all_ready_is_healthy() {
        let registry = registry_with(&["System.Utils", "System.Config"]);
        let mut state = BuildState::new();
        state.set_status("System.Utils", ModuleStatus::Ready);
        state.set_status("System.Config", ModuleStatus::Ready);

        let report = health_report(&registry, &state);
        assert_eq!(report.total_registered, 2);
        assert_eq!(report.ready, vec!["System.Utils", "System.Config"]);
        assert!(report.fallback.is_empty());
        assert_eq!(report.status, SystemStatus::Healthy);
    }

    #[test]
    fn any_fallback_is_degraded_and_named() {
        let registry = registry_with(&["System.Utils", "System.AI"]);
        let mut state = BuildState::new();
        state.set_status("System.Utils", ModuleStatus::Ready);
        state.set_status("System.AI", ModuleStatus::Fallback);

        let report = health_report(&registry, &state);
        assert_eq!(report.status, SystemStatus::Degraded);
        assert_eq!(report.fallback, vec!["System.AI"]);
    }

    #[test]
    fn stuck_failure_is_critical_and_named() {
        let registry = registry_with(&["System.AI"]);
        let mut state = BuildState::new();
        state.set_status("System.AI", ModuleStatus::Failed);

        let report = health_report(&registry, &state);
        assert_eq!(report.status, SystemStatus::Critical);
        assert_eq!(report.failed, vec!["System.AI"]);
    }

    #[test]
    fn total_registered_counts_distinct_names() {
        let mut registry = ModuleRegistry::new();
        registry.register("System.Config", &[], stub_factory());
        registry.register("System.Config", &[], stub_factory());
        registry.register("System.Utils", &[], stub_factory());

        let report = health_report(&registry, &BuildState::new());
        assert_eq!(report.total_registered, 2);
    }

    #[test]
    fn report_serializes_module_name_lists() {
        let registry = registry_with(&["System.Utils", "System.AI"]);
        let mut state = BuildState::new();
        state.set_status("System.Utils", ModuleStatus::Ready);
        state.set_status("System.AI", ModuleStatus::Fallback);

        let json = serde_json::to_value(health_report(&registry, &state)).unwrap();
        assert!(json["ready"].is_array());
        assert_eq!(json["ready"], serde_json::json!(["System.Utils"]));
        assert_eq!(json["fallback"], serde_json::json!(["System.AI"]));
        assert_eq!(json["failed"], serde_json::json!([]));
        assert_eq!(json["status"], "Degraded");
    }

    #[test]
    fn load_order_tiers_foundation_system_feature_entrypoint() {
        let registry = registry_with(&[
            "AgentRouter",
            "System.Initializer",
            "System.Telemetry",
            "System.Config",
            "System.Utils",
            "System.AI",
        ]);

        let order = suggested_load_order(&registry);
        assert_eq!(
            order,
            vec![
                "System.Utils",
                "System.Config",
                "System.AI",
                "System.Telemetry",
                "AgentRouter",
                "System.Initializer",
            ]
        );
    }
}
