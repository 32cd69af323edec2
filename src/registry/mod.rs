// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod descriptor;
mod module_registry;

pub use descriptor::{Factory, ModuleDescriptor};
pub use module_registry::ModuleRegistry;
