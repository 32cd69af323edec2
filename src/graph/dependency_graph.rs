// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use crate::registry::ModuleRegistry;
use crate::resolver::DependencyResolver;

/// Newtype wrapper for the module dependency graph.
///
/// Edges point from a module to the canonical names of its resolved
/// dependencies. Unresolved dependencies never appear: the resolver drops
/// those edges (with a warning) during construction.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph(pub HashMap<String, Vec<String>>);

impl DependencyGraph {
    /// Create a new empty dependency graph.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Build the graph for every registered module, resolving each
    /// declared dependency name through the resolver.
    pub fn from_registry(registry: &ModuleRegistry, resolver: &DependencyResolver) -> Self {
        let mut graph = HashMap::new();

        for name in registry.names() {
            let declared = registry
                .get(name)
                .map(|descriptor| descriptor.dependencies.clone())
                .unwrap_or_default();

            let edges = resolver
                .resolve(registry, name, &declared)
                .into_iter()
                .filter_map(|dependency| dependency.resolved)
                .collect();

            graph.insert(name.clone(), edges);
        }

        Self(graph)
    }

    /// Get the resolved dependencies of a module.
    pub fn dependencies(&self, module: &str) -> Option<&Vec<String>> {
        self.0.get(module)
    }

    /// All module names in the graph.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, Vec<String>>> for DependencyGraph {
    fn from(graph: HashMap<String, Vec<String>>) -> Self {
        Self(graph)
    }
}

impl From<DependencyGraph> for HashMap<String, Vec<String>> {
    fn from(graph: DependencyGraph) -> Self {
        graph.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AliasTable;
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

    #[test]
    fn from_registry_resolves_aliases_and_drops_unresolved_edges() {
        let mut registry = ModuleRegistry::new();
        registry.register("System.Utils", &[], stub_factory());
        registry.register("System.Config", &["Utils", "Nonexistent"], stub_factory());
        let resolver = DependencyResolver::new(AliasTable::new());

        let graph = DependencyGraph::from_registry(&registry, &resolver);

        assert_eq!(graph.len(), 2);
        assert_eq!(
            graph.dependencies("System.Config"),
            Some(&vec!["System.Utils".to_string()])
        );
        assert_eq!(graph.dependencies("System.Utils"), Some(&vec![]));
    }
}
