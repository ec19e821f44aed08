use std::path::Path;

use crate::error::AccessError;
use crate::ports::AssetSource;

/// Reads assets from the local filesystem as UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsAssetSource;

impl AssetSource for FsAssetSource {
    fn read_text(&self, asset: &Path) -> Result<String, AccessError> {
        let bytes = std::fs::read(asset).map_err(|e| AccessError::from_io(asset, e))?;
        String::from_utf8(bytes).map_err(|_| AccessError::Encoding {
            path: asset.to_path_buf(),
        })
    }
}
