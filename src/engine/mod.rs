// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod build_state;
mod container;


pub use build_state::{BuildState, ModuleStatus};
pub use container::Container;
