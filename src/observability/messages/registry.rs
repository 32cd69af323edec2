// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for module registration events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// A module declaration was accepted into the registry.
///
/// # Log Level
/// `debug!` - High-volume bookkeeping event
///
/// # Example
/// ```
/// use modulith::observability::messages::registry::ModuleRegistered;
///
/// let msg = ModuleRegistered {
///     module: "System.Config",
///     dependency_count: 2,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ModuleRegistered<'a> {
    pub module: &'a str,
    pub dependency_count: usize,
}

impl Display for ModuleRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Registered module '{}' with {} dependencies",
            self.module, self.dependency_count
        )
    }
}

impl StructuredLog for ModuleRegistered<'_> {
    fn log(&self) {
        tracing::debug!(
            module = self.module,
            dependency_count = self.dependency_count,
            "{}", self
        );
    }
}

/// A name was registered again; the previous declaration was replaced.
///
/// # Log Level
/// `warn!` - Usually a packaging or load-order mistake
pub struct DuplicateRegistration<'a> {
    pub module: &'a str,
}

impl Display for DuplicateRegistration<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Module '{}' registered more than once; last declaration wins",
            self.module
        )
    }
}

impl StructuredLog for DuplicateRegistration<'_> {
    fn log(&self) {
        tracing::warn!(module = self.module, "{}", self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_message_names_module_and_count() {
        let msg = ModuleRegistered {
            module: "System.Config",
            dependency_count: 2,
        };
        assert_eq!(
            msg.to_string(),
            "Registered module 'System.Config' with 2 dependencies"
        );
    }

    #[test]
    fn duplicate_message_states_last_write_wins() {
        let msg = DuplicateRegistration {
            module: "System.AI",
        };
        assert!(msg.to_string().contains("last declaration wins"));
    }
}
