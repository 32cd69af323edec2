// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Namespace prefix tried as a last-resort resolution for short
/// dependency names ("Config" -> "System.Config").
pub const SYSTEM_NAMESPACE_PREFIX: &str = "System.";

/// Dotted names treated as foundational by the advisory load-order
/// heuristic. These come first regardless of naming convention.
pub const FOUNDATION_MODULES: &[&str] = &["System.Utils", "System.Config"];

/// Name fragments that mark a module as a bootstrap-style entrypoint for
/// the advisory load-order heuristic. These come last.
pub const ENTRYPOINT_MARKERS: &[&str] = &["Initializer", "Bootstrap", "Entry"];
