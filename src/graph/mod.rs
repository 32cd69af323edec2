// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod dependency_graph;
mod sorter;

pub use dependency_graph::DependencyGraph;
pub use sorter::{topological_order, topological_order_isolating, SortOutcome};
