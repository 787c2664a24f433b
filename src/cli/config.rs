//! Shared configuration types for CLI commands

use serde::{Deserialize, Serialize};

use crate::search::SearchConfig;

/// Common configuration shared across commands
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Debug logging for the solver
    pub verbose: bool,

    /// Print machine-readable JSON instead of text
    pub json: bool,
}

impl CommonConfig {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }
}

/// Search configuration from the `--no-pruning` flag
pub fn search_config(no_pruning: bool) -> SearchConfig {
    SearchConfig {
        pruning: !no_pruning,
    }
}
