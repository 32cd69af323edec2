// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod alias_table;

pub mod consts;

pub use alias_table::{load_alias_table, AliasTable};
