// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod capability;
pub mod exports;

pub use capability::{CapabilityResponse, KeyValue, Logging, RequestHandling};
pub use exports::{Exports, ResolvedExports};
