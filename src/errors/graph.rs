// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors surfaced by dependency-graph ordering.

use thiserror::Error;

/// Errors from topological ordering of the module dependency graph.
///
/// Only the offline/packaging sort returns these; the runtime container
/// isolates the same conditions per module instead of failing the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A circular dependency was detected. The path lists every module on
    /// the cycle, ending with a repeat of the first (`A -> B -> A`).
    #[error("cyclic dependency detected: {}", cycle.join(" -> "))]
    CyclicDependency { cycle: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_error_formats_full_path() {
        let error = GraphError::CyclicDependency {
            cycle: vec!["A".into(), "B".into(), "A".into()],
        };
        assert_eq!(error.to_string(), "cyclic dependency detected: A -> B -> A");
    }
}
