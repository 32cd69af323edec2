// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Dependency name resolution.
//!
//! Declared dependency names may be short aliases ("Config"), full dotted
//! names ("System.Config"), or typos. The resolver turns each declared
//! name into a canonical registry key using three strategies, first match
//! wins:
//!
//! 1. Direct registry lookup of the name as written.
//! 2. Alias table lookup, accepted only if the target exists in the
//!    registry.
//! 3. The `"System." + name` convention fallback.
//!
//! A name no strategy can resolve is recorded as unresolved; the graph
//! edge is dropped with a warning rather than failing the run.

use crate::config::consts::SYSTEM_NAMESPACE_PREFIX;
use crate::config::AliasTable;
use crate::observability::messages::resolver::UnresolvedDependency;
use crate::observability::messages::StructuredLog;
use crate::registry::ModuleRegistry;

/// One declared dependency after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependency {
    /// The name exactly as the module declared it; factories receive
    /// their dependency exports keyed by this.
    pub requested: String,
    /// The canonical registry key, or `None` when unresolved.
    pub resolved: Option<String>,
}

/// Resolves declared dependency names against a registry using an
/// injected alias table.
#[derive(Debug, Clone, Default)]
pub struct DependencyResolver {
    aliases: AliasTable,
}

impl DependencyResolver {
    pub fn new(aliases: AliasTable) -> Self {
        Self { aliases }
    }

    /// Resolve a single name to a canonical registry key.
    pub fn resolve_name(&self, registry: &ModuleRegistry, name: &str) -> Option<String> {
        if registry.contains(name) {
            return Some(name.to_string());
        }

        if let Some(full) = self.aliases.lookup(name) {
            if registry.contains(full) {
                return Some(full.to_string());
            }
        }

        let conventional = format!("{SYSTEM_NAMESPACE_PREFIX}{name}");
        if registry.contains(&conventional) {
            return Some(conventional);
        }

        None
    }

    /// Resolve a module's declared dependency list in declaration order.
    ///
    /// Unresolved entries are flagged and logged; callers decide whether
    /// to drop the edge (graph construction) or substitute a stand-in
    /// (build orchestration).
    pub fn resolve(
        &self,
        registry: &ModuleRegistry,
        module: &str,
        declared: &[String],
    ) -> Vec<ResolvedDependency> {
        declared
            .iter()
            .map(|name| {
                let resolved = self.resolve_name(registry, name);
                if resolved.is_none() {
                    UnresolvedDependency {
                        module,
                        dependency: name,
                    }
                    .log();
                }
                ResolvedDependency {
                    requested: name.clone(),
                    resolved,
                }
            })
            .collect()
    }
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
    fn direct_registry_match_wins() {
        let registry = registry_with(&["System.Config", "Config"]);
        // "Config" is itself registered, so no alias or convention applies.
        let resolver = DependencyResolver::new(AliasTable::from_pairs([(
            "Config",
            "System.Config",
        )]));
        assert_eq!(
            resolver.resolve_name(&registry, "Config"),
            Some("Config".to_string())
        );
    }

    #[test]
    fn alias_table_resolves_short_name() {
        let registry = registry_with(&["System.AgentDispatcher.Core"]);
        let resolver = DependencyResolver::new(AliasTable::from_pairs([(
            "Dispatcher",
            "System.AgentDispatcher.Core",
        )]));
        assert_eq!(
            resolver.resolve_name(&registry, "Dispatcher"),
            Some("System.AgentDispatcher.Core".to_string())
        );
    }

    #[test]
    fn alias_to_unregistered_target_falls_through() {
        // Alias points at a module that was never registered, but the
        // System.-prefix convention still finds the real one.
        let registry = registry_with(&["System.Telemetry"]);
        let resolver = DependencyResolver::new(AliasTable::from_pairs([(
            "Telemetry",
            "System.Observability.Telemetry",
        )]));
        assert_eq!(
            resolver.resolve_name(&registry, "Telemetry"),
            Some("System.Telemetry".to_string())
        );
    }

    #[test]
    fn system_prefix_convention_applies_without_alias() {
        let registry = registry_with(&["System.Utils"]);
        let resolver = DependencyResolver::default();
        assert_eq!(
            resolver.resolve_name(&registry, "Utils"),
            Some("System.Utils".to_string())
        );
    }

    #[test]
    fn unknown_name_is_unresolved() {
        let registry = registry_with(&["System.Utils"]);
        let resolver = DependencyResolver::default();
        assert_eq!(resolver.resolve_name(&registry, "Nonexistent"), None);
    }

    #[test]
    fn resolve_preserves_declaration_order_and_flags_unresolved() {
        let registry = registry_with(&["System.Utils", "System.Config"]);
        let resolver = DependencyResolver::default();

        let declared = vec![
            "Config".to_string(),
            "Missing".to_string(),
            "Utils".to_string(),
        ];
        let resolved = resolver.resolve(&registry, "System.AI", &declared);

        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved[0].requested, "Config");
        assert_eq!(resolved[0].resolved.as_deref(), Some("System.Config"));
        assert_eq!(resolved[1].requested, "Missing");
        assert_eq!(resolved[1].resolved, None);
        assert_eq!(resolved[2].resolved.as_deref(), Some("System.Utils"));
    }
}
