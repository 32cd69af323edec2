// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Topological ordering of the module dependency graph.
//!
//! Uses depth-first search with the classic three colors: white
//! (unvisited), gray (on the current resolution path), black (fully
//! resolved). Visiting a module recursively visits its resolved
//! dependencies first, then appends the module itself, so every module
//! lands strictly after everything it depends on. Meeting a gray node is
//! a cycle; the exact cycle path is extracted from the current DFS path
//! for reporting.
//!
//! Cycle severity is a policy choice made by the caller, not inferred:
//!
//! * [`topological_order`]: offline/packaging contexts. A fixed file or
//!   load order is meaningless if any cycle exists, so the first cycle
//!   aborts the whole sort.
//! * [`topological_order_isolating`]: runtime/bootstrap contexts. Cycle
//!   members are excluded from the order and reported; structurally
//!   independent modules still sort normally.
//!
//! Roots are visited in sorted name order so both entry points produce
//! deterministic output for the same graph.

use std::collections::HashSet;

use crate::errors::GraphError;
use crate::graph::DependencyGraph;

/// Result of an isolating sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortOutcome {
    /// Valid dependency order for every module not caught in a cycle.
    pub order: Vec<String>,
    /// One entry per detected cycle, each the full path of names with the
    /// starting module repeated at the end.
    pub cycles: Vec<Vec<String>>,
}

impl SortOutcome {
    /// Names of every module on at least one detected cycle.
    pub fn cyclic_modules(&self) -> HashSet<&str> {
        self.cycles
            .iter()
            .flat_map(|cycle| cycle.iter().map(String::as_str))
            .collect()
    }
}

/// Compute a full build order, aborting on the first cycle.
pub fn topological_order(graph: &DependencyGraph) -> Result<Vec<String>, GraphError> {
    match sort(graph, CyclePolicy::Abort) {
        SortResult::Ordered(outcome) => Ok(outcome.order),
        SortResult::Aborted(cycle) => Err(GraphError::CyclicDependency { cycle }),
    }
}

/// Compute a build order for every acyclic module, collecting cycles
/// instead of failing.
pub fn topological_order_isolating(graph: &DependencyGraph) -> SortOutcome {
    match sort(graph, CyclePolicy::Isolate) {
        SortResult::Ordered(outcome) => outcome,
        // Isolate never aborts.
        SortResult::Aborted(cycle) => SortOutcome {
            order: Vec::new(),
            cycles: vec![cycle],
        },
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum CyclePolicy {
    Abort,
    Isolate,
}

enum SortResult {
    Ordered(SortOutcome),
    Aborted(Vec<String>),
}

fn sort(graph: &DependencyGraph, policy: CyclePolicy) -> SortResult {
    let mut visited = HashSet::new();
    let mut on_path = HashSet::new();
    let mut path = Vec::new();
    let mut poisoned = HashSet::new();
    let mut outcome = SortOutcome::default();

    let mut roots: Vec<&String> = graph.keys().collect();
    roots.sort();

    for root in roots {
        if visited.contains(root.as_str()) {
            continue;
        }
        if let Some(cycle) = visit(
            root,
            graph,
            policy,
            &mut visited,
            &mut on_path,
            &mut path,
            &mut poisoned,
            &mut outcome,
        ) {
            return SortResult::Aborted(cycle);
        }
    }

    SortResult::Ordered(outcome)
}

/// DFS step. Returns `Some(cycle)` only under the abort policy.
#[allow(clippy::too_many_arguments)]
fn visit(
    node: &str,
    graph: &DependencyGraph,
    policy: CyclePolicy,
    visited: &mut HashSet<String>,
    on_path: &mut HashSet<String>,
    path: &mut Vec<String>,
    poisoned: &mut HashSet<String>,
    outcome: &mut SortOutcome,
) -> Option<Vec<String>> {
    on_path.insert(node.to_string());
    path.push(node.to_string());

    if let Some(dependencies) = graph.dependencies(node) {
        for dependency in dependencies {
            if on_path.contains(dependency.as_str()) {
                let cycle = extract_cycle(path, dependency);
                match policy {
                    CyclePolicy::Abort => return Some(cycle),
                    CyclePolicy::Isolate => {
                        for member in &cycle {
                            poisoned.insert(member.clone());
                        }
                        outcome.cycles.push(cycle);
                    }
                }
                continue;
            }
            if !visited.contains(dependency.as_str()) {
                if let Some(cycle) = visit(
                    dependency, graph, policy, visited, on_path, path, poisoned, outcome,
                ) {
                    return Some(cycle);
                }
            }
        }
    }

    on_path.remove(node);
    path.pop();
    visited.insert(node.to_string());
    if !poisoned.contains(node) {
        outcome.order.push(node.to_string());
    }
    None
}

/// Extract the cycle path: the segment of the current DFS path from the
/// revisited node onward, closed with a repeat of that node.
fn extract_cycle(path: &[String], revisited: &str) -> Vec<String> {
    let start = path
        .iter()
        .position(|name| name == revisited)
        .unwrap_or(0);
    let mut cycle = path[start..].to_vec();
    cycle.push(revisited.to_string());
    cycle
}
