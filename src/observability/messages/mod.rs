// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each operationally interesting event gets its own message type
//! implementing `Display` for human-readable output and [`StructuredLog`]
//! for emission through `tracing` with structured fields. Call sites
//! construct the message and invoke `.log()`; the message decides its own
//! level.
//!
//! # Organization
//!
//! Messages are organized by subsystem:
//!
//! * `registry` - module registration events
//! * `resolver` - dependency name resolution events
//! * `engine` - build orchestration lifecycle events
//! * `lifecycle` - startup hook execution events

use std::fmt::Display;

pub mod engine;
pub mod lifecycle;
pub mod registry;
pub mod resolver;

/// Emit this message through `tracing` at its designated level, with its
/// fields attached as structured fields.
pub trait StructuredLog: Display {
    fn log(&self);
}
