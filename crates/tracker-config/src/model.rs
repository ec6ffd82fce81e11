use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DATA_DIR_NAME: &str = "expense-tracker";

/// Application settings loaded before the record store is opened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for stored records. Defaults to the platform data dir.
    pub data_root: Option<PathBuf>,

    #[serde(default = "Config::default_log_filter")]
    pub log_filter: String,

    /// Number of transactions shown in summaries.
    #[serde(default = "Config::default_recent_limit")]
    pub recent_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_root: None,
            log_filter: Self::default_log_filter(),
            recent_limit: Self::default_recent_limit(),
        }
    }
}

impl Config {
    pub fn default_log_filter() -> String {
        "expense_core=info".into()
    }

    pub fn default_recent_limit() -> usize {
        5
    }

    pub fn resolve_data_root(&self) -> PathBuf {
        if let Some(path) = &self.data_root {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join(DATA_DIR_NAME)
    }
}
