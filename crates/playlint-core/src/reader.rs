//! Read-and-trim helper used when listing text is loaded for upload.
//!
//! Unlike `LengthValidator`, this returns the processed text itself and lets
//! the caller pick what happens to oversized content.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{LengthLimit, normalize};
use crate::error::{AccessError, LimitExceeded, PlaylintError};
use crate::ports::AssetSource;

/// What to do when normalized text is longer than its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Fail with `LimitExceeded`.
    #[default]
    Error,
    /// Keep the first `limit` characters.
    Truncate,
}

impl OverflowPolicy {
    pub fn from_error_flag(error_on_size_limit: bool) -> Self {
        if error_on_size_limit {
            OverflowPolicy::Error
        } else {
            OverflowPolicy::Truncate
        }
    }
}

/// Reads `asset`, normalizes it and applies `limit` under `policy`.
///
/// - missing asset → `Ok(None)`
/// - empty text after processing → `Ok(None)`
/// - other access failures propagate
pub fn read_processed<S: AssetSource>(
    source: &S,
    asset: &Path,
    limit: LengthLimit,
    policy: OverflowPolicy,
) -> Result<Option<String>, PlaylintError> {
    let raw = match source.read_text(asset) {
        Ok(raw) => raw,
        Err(AccessError::NotFound { .. }) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let text = normalize(&raw);
    let length = text.chars().count();
    if limit.allows(length) {
        return Ok(non_empty(text));
    }

    match policy {
        OverflowPolicy::Error => Err(LimitExceeded {
            path: asset.to_path_buf(),
            limit: limit.get(),
            length,
        }
        .into()),
        OverflowPolicy::Truncate => {
            warn!(
                asset = %asset.display(),
                length,
                limit = limit.get(),
                "truncating text to its limit"
            );
            Ok(non_empty(text.chars().take(limit.get()).collect()))
        }
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}
