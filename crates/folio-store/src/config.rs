//! Environment-driven configuration for the store.

use std::env;
use std::path::PathBuf;

use folio_core::defaults::{DATA_PATH, DATA_PATH_ENV};

/// Where the persisted document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DATA_PATH),
        }
    }
}

impl StoreConfig {
    /// Read configuration from the environment (`FOLIO_DATA_PATH`), falling
    /// back to the documented default. Callers that want `.env` support run
    /// `dotenvy::dotenv()` first, as the snapshot binary does.
    pub fn from_env() -> Self {
        let data_path = env::var(DATA_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DATA_PATH));
        Self { data_path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        assert_eq!(StoreConfig::default().data_path, PathBuf::from(DATA_PATH));
    }
}
