// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Startup hook execution.
//!
//! After a build pass every registered module is terminal; the lifecycle
//! runner then walks them in registration order and invokes the optional
//! `init()` hook on each module that built for real. Fallback stand-ins
//! are skipped: there is nothing genuine to initialize. Hooks are
//! isolated from one another, so a failing hook is logged and counted but
//! never stops the pass and never rethrows.

use crate::engine::BuildState;
use crate::observability::messages::lifecycle::{InitHookFailed, LifecycleCompleted};
use crate::observability::messages::StructuredLog;
use crate::registry::ModuleRegistry;

/// Outcome counts for one lifecycle pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitSummary {
    /// Hooks that ran and returned `Ok`.
    pub succeeded: usize,
    /// Hooks that ran and returned an error.
    pub failed: usize,
    /// Modules with no hook, no exports, or a fallback stand-in.
    pub skipped: usize,
}

/// Runs `init()` hooks over a completed build.
pub struct LifecycleRunner;

impl LifecycleRunner {
    /// One pass over every registered module, in registration order.
    pub fn run(registry: &ModuleRegistry, state: &BuildState) -> InitSummary {
        let mut summary = InitSummary::default();

        for name in registry.names() {
            let Some(exports) = state.export(name) else {
                summary.skipped += 1;
                continue;
            };
            if exports.is_fallback() {
                summary.skipped += 1;
                continue;
            }
            match exports.init() {
                None => summary.skipped += 1,
                Some(Ok(())) => {
                    tracing::debug!(module = %name, "startup hook succeeded");
                    summary.succeeded += 1;
                }
                Some(Err(error)) => {
                    InitHookFailed {
                        module: name,
                        error: &error,
                    }
                    .log();
                    summary.failed += 1;
                }
            }
        }

        LifecycleCompleted {
            succeeded: summary.succeeded,
            failed: summary.failed,
            skipped: summary.skipped,
        }
        .log();

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ModuleStatus;
    use crate::fallback::{FallbackModule, FallbackReason};
    use crate::registry::Factory;
    use crate::traits::Exports;
    use std::any::Any;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Hooked {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl Exports for Hooked {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn init(&self) -> Option<anyhow::Result<()>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Some(Err(anyhow::anyhow!("hook exploded")))
            } else {
                Some(Ok(()))
            }
        }
    }

    struct Hookless;

    impl Exports for Hookless {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn stub_factory() -> Factory {
        Box::new(|_| Ok(Arc::new(Hookless)))
    }

    fn ready(state: &mut BuildState, name: &str, exports: Arc<dyn Exports>) {
        state.set_status(name, ModuleStatus::Ready);
        state.insert_export(name, exports);
    }

    #[test]
    fn hooks_run_for_ready_modules_only() {
        let mut registry = ModuleRegistry::new();
        registry.register("System.Utils", &[], stub_factory());
        registry.register("System.Config", &[], stub_factory());
        registry.register("System.AI", &[], stub_factory());

        let calls = Arc::new(AtomicUsize::new(0));
        let mut state = BuildState::new();
        ready(
            &mut state,
            "System.Utils",
            Arc::new(Hooked {
                calls: Arc::clone(&calls),
                fail: false,
            }),
        );
        ready(&mut state, "System.Config", Arc::new(Hookless));
        state.set_status("System.AI", ModuleStatus::Fallback);
        state.insert_export(
            "System.AI",
            FallbackModule::synthesize("System.AI", FallbackReason::Unregistered),
        );

        let summary = LifecycleRunner::run(&registry, &state);

        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failed, 0);
        // One module without a hook, one fallback stand-in.
        assert_eq!(summary.skipped, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failing_hook_is_counted_and_does_not_stop_the_pass() {
        let mut registry = ModuleRegistry::new();
        registry.register("System.First", &[], stub_factory());
        registry.register("System.Second", &[], stub_factory());

        let first_calls = Arc::new(AtomicUsize::new(0));
        let second_calls = Arc::new(AtomicUsize::new(0));
        let mut state = BuildState::new();
        ready(
            &mut state,
            "System.First",
            Arc::new(Hooked {
                calls: Arc::clone(&first_calls),
                fail: true,
            }),
        );
        ready(
            &mut state,
            "System.Second",
            Arc::new(Hooked {
                calls: Arc::clone(&second_calls),
                fail: false,
            }),
        );

        let summary = LifecycleRunner::run(&registry, &state);

        assert_eq!(summary.failed, 1);
        assert_eq!(summary.succeeded, 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unbuilt_modules_are_skipped() {
        let mut registry = ModuleRegistry::new();
        registry.register("System.Pending", &[], stub_factory());

        let summary = LifecycleRunner::run(&registry, &BuildState::new());
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.succeeded, 0);
    }
}
