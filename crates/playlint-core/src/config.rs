//! LintConfig - per-detail limit overrides and the overflow policy.
//!
//! Every field is optional so an empty object (`{}`) gives the store
//! defaults.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{LengthLimit, ListingDetail};
use crate::error::ConfigError;
use crate::reader::OverflowPolicy;
use crate::validator::LengthValidator;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Fail on oversized text instead of truncating it.
    pub error_on_size_limit: bool,

    /// Limits that replace the store defaults, keyed by file name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub limits: BTreeMap<ListingDetail, LengthLimit>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            error_on_size_limit: true,
            limits: BTreeMap::new(),
        }
    }
}

impl LintConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn limit_for(&self, detail: ListingDetail) -> LengthLimit {
        self.limits
            .get(&detail)
            .copied()
            .unwrap_or_else(|| detail.max_length())
    }

    pub fn overflow_policy(&self) -> OverflowPolicy {
        OverflowPolicy::from_error_flag(self.error_on_size_limit)
    }

    pub fn validator_for(&self, detail: ListingDetail) -> LengthValidator {
        LengthValidator::new(self.limit_for(detail))
    }
}
