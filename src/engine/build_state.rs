// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::Arc;

use crate::traits::Exports;

/// Construction status of a module.
///
/// The orchestrator drives each module through
/// `Pending -> Building -> Ready` on success or
/// `Pending -> Building -> Failed -> Fallback` on failure. `Failed` is
/// transient: it is always converted to `Fallback` before control returns
/// to callers, so dependents only ever observe terminal statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleStatus {
    Pending,
    Building,
    Ready,
    Failed,
    Fallback,
}

impl ModuleStatus {
    /// Terminal statuses carry exports and are never rebuilt.
    pub fn is_terminal(self) -> bool {
        matches!(self, ModuleStatus::Ready | ModuleStatus::Fallback)
    }
}

/// Per-module build results, written only by the orchestrator.
///
/// The exports map doubles as the shared namespace keyed by dotted module
/// name: once a module reaches a terminal status its exports are
/// reachable here without going back through the registry.
#[derive(Default)]
pub struct BuildState {
    statuses: HashMap<String, ModuleStatus>,
    exports: HashMap<String, Arc<dyn Exports>>,
}

impl BuildState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status for a name; anything never touched is `Pending`.
    pub fn status(&self, name: &str) -> ModuleStatus {
        self.statuses
            .get(name)
            .copied()
            .unwrap_or(ModuleStatus::Pending)
    }

    pub fn set_status(&mut self, name: &str, status: ModuleStatus) {
        self.statuses.insert(name.to_string(), status);
    }

    pub fn export(&self, name: &str) -> Option<Arc<dyn Exports>> {
        self.exports.get(name).map(Arc::clone)
    }

    pub fn insert_export(&mut self, name: &str, exports: Arc<dyn Exports>) {
        self.exports.insert(name.to_string(), exports);
    }

    pub fn len(&self) -> usize {
        self.exports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::{FallbackModule, FallbackReason};

    #[test]
    fn untouched_names_are_pending() {
        let state = BuildState::new();
        assert_eq!(state.status("System.Config"), ModuleStatus::Pending);
        assert!(state.export("System.Config").is_none());
    }

    #[test]
    fn terminal_statuses() {
        assert!(ModuleStatus::Ready.is_terminal());
        assert!(ModuleStatus::Fallback.is_terminal());
        assert!(!ModuleStatus::Pending.is_terminal());
        assert!(!ModuleStatus::Building.is_terminal());
        assert!(!ModuleStatus::Failed.is_terminal());
    }

    #[test]
    fn exports_are_reachable_by_dotted_name() {
        let mut state = BuildState::new();
        let exports = FallbackModule::synthesize("System.AI", FallbackReason::Unregistered);
        state.set_status("System.AI", ModuleStatus::Fallback);
        state.insert_export("System.AI", exports);

        assert_eq!(state.status("System.AI"), ModuleStatus::Fallback);
        assert!(state.export("System.AI").is_some());
        assert_eq!(state.len(), 1);
    }
}
