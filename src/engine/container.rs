// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The container: registration, dependency-ordered construction, and
//! bootstrap orchestration.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::AliasTable;
use crate::diagnostics::{self, HealthReport};
use crate::engine::{BuildState, ModuleStatus};
use crate::fallback::{FallbackModule, FallbackReason};
use crate::graph::DependencyGraph;
use crate::lifecycle::{InitSummary, LifecycleRunner};
use crate::observability::messages::engine::{
    BuildAllCompleted, BuildAllStarted, CycleIsolated, FactoryFailed, ModuleBuilt,
};
use crate::observability::messages::resolver::UnknownModuleRequested;
use crate::observability::messages::StructuredLog;
use crate::registry::ModuleRegistry;
use crate::resolver::DependencyResolver;
use crate::traits::{Exports, ResolvedExports};

/// Owns the registry, resolver, and build state, and drives every module
/// through its build lifecycle.
///
/// Containers are explicit instances, not ambient globals: tests and
/// embedders can hold several isolated containers at once. The whole
/// pipeline is single-threaded and synchronous; a module's factory is
/// never invoked before all of its resolved dependencies have reached a
/// terminal status.
///
/// Failure isolation: nothing that goes wrong while resolving,
/// constructing, or initializing one module prevents an independent
/// module from completing. Failures degrade the affected module to a
/// fallback stand-in instead.
pub struct Container {
    registry: ModuleRegistry,
    resolver: DependencyResolver,
    state: BuildState,
    /// Names currently being built on this call stack (the gray path),
    /// used to extract full cycle paths.
    build_stack: Vec<String>,
    /// Cycle members awaiting degradation, mapped to their cycle path.
    poisoned: HashMap<String, Vec<String>>,
}

impl Container {
    /// A container with an empty alias table.
    pub fn new() -> Self {
        Self::with_aliases(AliasTable::new())
    }

    /// A container resolving short dependency names through the given
    /// alias table.
    pub fn with_aliases(aliases: AliasTable) -> Self {
        Self {
            registry: ModuleRegistry::new(),
            resolver: DependencyResolver::new(aliases),
            state: BuildState::new(),
            build_stack: Vec::new(),
            poisoned: HashMap::new(),
        }
    }

    /// Register a module with an explicit dependency-name list.
    ///
    /// Dependencies may be short aliases or full dotted names and may
    /// reference modules that are not registered yet; resolution happens
    /// at build time. Re-registering a name overwrites the previous
    /// declaration with a warning.
    pub fn register<F>(&mut self, name: &str, dependencies: &[&str], factory: F)
    where
        F: Fn(&ResolvedExports) -> anyhow::Result<Arc<dyn Exports>> + Send + Sync + 'static,
    {
        self.registry.register(name, dependencies, Box::new(factory));
    }

    /// Whether a name (short or full) resolves to a registered module.
    pub fn is_registered(&self, name: &str) -> bool {
        self.resolver.resolve_name(&self.registry, name).is_some()
    }

    /// Build one module (and, recursively, its dependencies) on demand.
    ///
    /// Always returns usable exports: real ones on success, a synthesized
    /// stand-in when the name is unregistered, its factory fails, or it
    /// sits on a dependency cycle. Memoized: the factory for a name runs
    /// at most once per process lifetime.
    pub fn build(&mut self, name: &str) -> Arc<dyn Exports> {
        match self.resolver.resolve_name(&self.registry, name) {
            Some(key) => self.build_internal(&key),
            None => {
                if self.state.status(name).is_terminal() {
                    if let Some(exports) = self.state.export(name) {
                        return exports;
                    }
                }
                UnknownModuleRequested { module: name }.log();
                let exports = FallbackModule::synthesize(name, FallbackReason::Unregistered);
                self.state.set_status(name, ModuleStatus::Fallback);
                self.state.insert_export(name, Arc::clone(&exports));
                exports
            }
        }
    }

    /// Build every registered module, continuing past individual
    /// failures.
    pub fn build_all(&mut self) {
        let names: Vec<String> = self.registry.names().cloned().collect();
        BuildAllStarted {
            module_count: names.len(),
        }
        .log();

        for name in &names {
            self.build_internal(name);
        }

        let ready = names
            .iter()
            .filter(|n| self.state.status(n) == ModuleStatus::Ready)
            .count();
        BuildAllCompleted {
            ready,
            fallback: names.len() - ready,
        }
        .log();
    }

    /// Resolve several modules at once, building on demand.
    ///
    /// The result is keyed by the names as requested, so callers can ask
    /// for short aliases and index the map with the same strings.
    pub fn get(&mut self, names: &[&str]) -> HashMap<String, Arc<dyn Exports>> {
        names
            .iter()
            .map(|name| ((*name).to_string(), self.build(name)))
            .collect()
    }

    /// Full bootstrap: build everything, run startup hooks, and report
    /// system health.
    pub fn bootstrap(&mut self) -> HealthReport {
        self.build_all();
        LifecycleRunner::run(&self.registry, &self.state);
        self.health_report()
    }

    /// Run startup hooks without rebuilding; exposed for callers that
    /// interleave registration phases.
    pub fn run_lifecycle(&mut self) -> InitSummary {
        LifecycleRunner::run(&self.registry, &self.state)
    }

    /// Current health partition of all registered modules.
    pub fn health_report(&self) -> HealthReport {
        diagnostics::health_report(&self.registry, &self.state)
    }

    /// The resolved dependency graph for all registered modules.
    pub fn dependency_graph(&self) -> DependencyGraph {
        DependencyGraph::from_registry(&self.registry, &self.resolver)
    }

    /// Construction status for a name (short or full).
    pub fn status(&self, name: &str) -> ModuleStatus {
        match self.resolver.resolve_name(&self.registry, name) {
            Some(key) => self.state.status(&key),
            None => self.state.status(name),
        }
    }

    /// Exports previously recorded under a dotted name, without
    /// triggering a build.
    pub fn export(&self, name: &str) -> Option<Arc<dyn Exports>> {
        self.state.export(name)
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    fn build_internal(&mut self, key: &str) -> Arc<dyn Exports> {
        let status = self.state.status(key);
        if status.is_terminal() {
            return self
                .state
                .export(key)
                .unwrap_or_else(|| FallbackModule::synthesize(key, FallbackReason::Unregistered));
        }
        if status == ModuleStatus::Building {
            // Revisited on the same call stack: a cycle. Hand the caller
            // a stand-in; the member frames finalize as fallback when
            // they unwind.
            let cycle = self.record_cycle(key);
            return FallbackModule::synthesize(
                key,
                FallbackReason::CircularDependency { cycle },
            );
        }

        self.state.set_status(key, ModuleStatus::Building);
        self.build_stack.push(key.to_string());

        let declared = self
            .registry
            .get(key)
            .map(|descriptor| descriptor.dependencies.clone())
            .unwrap_or_default();
        let resolved = self.resolver.resolve(&self.registry, key, &declared);

        let mut dependency_exports = ResolvedExports::new();
        for dependency in resolved {
            let exports = match dependency.resolved {
                Some(dep_key) => self.build_internal(&dep_key),
                None => FallbackModule::synthesize(
                    &dependency.requested,
                    FallbackReason::Unresolved,
                ),
            };
            dependency_exports.insert(dependency.requested, exports);
        }

        self.build_stack.pop();

        if let Some(cycle) = self.poisoned.remove(key) {
            return self.degrade(key, FallbackReason::CircularDependency { cycle });
        }

        let built = match self.registry.get(key) {
            Some(descriptor) => (descriptor.factory)(&dependency_exports),
            None => Err(anyhow::anyhow!("module '{key}' disappeared from registry")),
        };

        match built {
            Ok(exports) => {
                self.state.set_status(key, ModuleStatus::Ready);
                self.state.insert_export(key, Arc::clone(&exports));
                ModuleBuilt {
                    module: key,
                    dependency_count: dependency_exports.len(),
                }
                .log();
                exports
            }
            Err(error) => {
                FactoryFailed {
                    module: key,
                    error: &error,
                }
                .log();
                self.degrade(
                    key,
                    FallbackReason::FactoryFailure {
                        error: error.to_string(),
                    },
                )
            }
        }
    }

    /// Extract the cycle path from the gray stack and mark every member
    /// for degradation.
    fn record_cycle(&mut self, revisited: &str) -> Vec<String> {
        let start = self
            .build_stack
            .iter()
            .position(|name| name == revisited)
            .unwrap_or(0);
        let mut cycle = self.build_stack[start..].to_vec();
        cycle.push(revisited.to_string());

        CycleIsolated { cycle: &cycle }.log();
        for member in &self.build_stack[start..] {
            self.poisoned.insert(member.clone(), cycle.clone());
        }
        cycle
    }

    /// Failed -> Fallback conversion: the only path out of a failed
    /// build, so callers never observe `Failed` after control returns.
    fn degrade(&mut self, key: &str, reason: FallbackReason) -> Arc<dyn Exports> {
        self.state.set_status(key, ModuleStatus::Failed);
        let exports = FallbackModule::synthesize(key, reason);
        self.state.set_status(key, ModuleStatus::Fallback);
        self.state.insert_export(key, Arc::clone(&exports));
        exports
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}
