use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::store::{JsonFileStore, LoanStore, MemoryLoanStore};

/// loan desk configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    /// tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,
    pub store: StoreBackend,
    /// print the month-by-month schedule after each calculation
    pub show_schedule: bool,
}

/// where loans and borrowers are persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoreBackend {
    Memory,
    JsonFile { path: PathBuf },
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            log_filter: "home_loan_rs=info".to_string(),
            store: StoreBackend::Memory,
            show_schedule: true,
        }
    }
}

impl DeskConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// open the configured store
    pub fn open_store(&self) -> Result<Box<dyn LoanStore>> {
        match &self.store {
            StoreBackend::Memory => Ok(Box::new(MemoryLoanStore::new())),
            StoreBackend::JsonFile { path } => Ok(Box::new(JsonFileStore::open(path.clone())?)),
        }
    }
}
