use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::AccessError;
use crate::ports::AssetSource;

/// In-memory assets keyed by path. Unknown paths are `NotFound`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssetSource {
    assets: HashMap<PathBuf, String>,
}

impl InMemoryAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.assets.insert(path.into(), text.into());
    }

    pub fn with_asset(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }
}

impl AssetSource for InMemoryAssetSource {
    fn read_text(&self, asset: &Path) -> Result<String, AccessError> {
        self.assets
            .get(asset)
            .cloned()
            .ok_or_else(|| AccessError::NotFound {
                path: asset.to_path_buf(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_stored_text() {
        let source = InMemoryAssetSource::new().with_asset("en-US/title", "Hello");
        assert_eq!(source.read_text(Path::new("en-US/title")).unwrap(), "Hello");
    }

    #[test]
    fn unknown_path_is_not_found() {
        let source = InMemoryAssetSource::new();
        let err = source.read_text(Path::new("en-US/title")).unwrap_err();
        assert!(matches!(err, AccessError::NotFound { .. }));
    }
}
