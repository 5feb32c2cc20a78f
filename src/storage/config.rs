//! Budget config repository for JSON storage
//!
//! Manages loading and saving the monthly budget to config.json

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::file_io::{read_json, write_json_atomic};
use super::Loaded;
use crate::error::{ExpenseResult, LoadWarning};
use crate::models::BudgetConfig;

/// Repository for budget config persistence
#[derive(Debug, Clone)]
pub struct ConfigRepository {
    path: PathBuf,
}

impl ConfigRepository {
    /// Create a new config repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the budget config, falling back to defaults if missing or malformed
    pub fn load(&self) -> Loaded<BudgetConfig> {
        match read_json::<BudgetConfig, _>(&self.path) {
            Ok(Some(config)) => {
                debug!(budget = %config.monthly_budget(), "Loaded budget config");
                Loaded::clean(config)
            }
            Ok(None) => Loaded::clean(BudgetConfig::default()),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Using default budget config");
                Loaded::with_warning(
                    BudgetConfig::default(),
                    LoadWarning::MalformedConfig {
                        path: self.path.clone(),
                        reason: e.to_string(),
                    },
                )
            }
        }
    }

    /// Replace the config file
    pub fn save(&self, config: &BudgetConfig) -> ExpenseResult<()> {
        write_json_atomic(&self.path, config)?;
        debug!(budget = %config.monthly_budget(), "Saved budget config");
        Ok(())
    }
}
