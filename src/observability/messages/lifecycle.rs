// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for startup hook execution events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// A module's startup hook returned an error. The failure is recorded
/// and the remaining hooks still run.
///
/// # Log Level
/// `warn!` - The module stays available with whatever state it built
pub struct InitHookFailed<'a> {
    pub module: &'a str,
    pub error: &'a anyhow::Error,
}

impl Display for InitHookFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Startup hook for module '{}' failed: {}",
            self.module, self.error
        )
    }
}

impl StructuredLog for InitHookFailed<'_> {
    fn log(&self) {
        tracing::warn!(module = self.module, error = %self.error, "{}", self);
    }
}

/// The lifecycle pass over all modules finished.
///
/// # Log Level
/// `info!` - Important operational event
pub struct LifecycleCompleted {
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl Display for LifecycleCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Lifecycle pass complete: {} hooks succeeded, {} failed, {} modules skipped",
            self.succeeded, self.failed, self.skipped
        )
    }
}

impl StructuredLog for LifecycleCompleted {
    fn log(&self) {
        tracing::info!(
            succeeded = self.succeeded,
            failed = self.failed,
            skipped = self.skipped,
            "{}", self
        );
    }
}
