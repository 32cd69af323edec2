// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for alias-table configuration loading.

use thiserror::Error;

/// Errors that can occur while loading an alias table from disk.
#[derive(Debug, Error)]
pub enum AliasTableError {
    #[error("failed to read alias table '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse alias table '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}
