// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;      // alias table + naming conventions
pub mod diagnostics; // health reporting
pub mod engine;      // build orchestration
pub mod errors;      // error handling
pub mod fallback;    // stand-in synthesis
pub mod graph;       // dependency graph + topological sorting
pub mod lifecycle;   // startup hooks
pub mod observability;
pub mod registry;    // module declarations
pub mod resolver;    // dependency name resolution
pub mod traits;      // unified abstractions
