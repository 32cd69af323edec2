// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Alias table: short dependency names mapped to full dotted module names.
//!
//! The table is external configuration data, not resolution logic. It is
//! loaded once when the container is constructed (from YAML or supplied
//! programmatically) and injected into the resolver, so graph resolution
//! can be unit-tested independently of any particular naming convention.
//!
//! # Example
//! ```yaml
//! aliases:
//!   Config: System.Config
//!   Utils: System.Utils
//!   Telemetry: System.Telemetry
//!   Dispatcher: System.AgentDispatcher.Core
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::errors::AliasTableError;

/// Mapping from short/contextual names to fully-qualified registry keys.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AliasTable {
    #[serde(default)]
    aliases: HashMap<String, String>,
}

impl AliasTable {
    /// An empty table; every lookup falls through to the other resolution
    /// strategies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(short, full)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            aliases: pairs
                .into_iter()
                .map(|(short, full)| (short.into(), full.into()))
                .collect(),
        }
    }

    /// Look up the fully-qualified name for a short name, if one is mapped.
    ///
    /// A hit is only a candidate: the resolver still verifies the target
    /// exists in the registry before using it.
    pub fn lookup(&self, short: &str) -> Option<&str> {
        self.aliases.get(short).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// Load an alias table from a YAML file.
pub fn load_alias_table<P: AsRef<Path>>(path: P) -> Result<AliasTable, AliasTableError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| AliasTableError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let table: AliasTable =
        serde_yaml::from_str(&content).map_err(|source| AliasTableError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    Ok(table)
}
