//! AssetSource port - read access to an asset's text.

use std::path::Path;

use crate::error::AccessError;

/// AssetSource returns the full text of an asset.
///
/// Implementations never modify the asset. A read failure must be reported
/// as an `AccessError`, never as empty content.
pub trait AssetSource: Send + Sync {
    fn read_text(&self, asset: &Path) -> Result<String, AccessError>;
}

impl<S: AssetSource + ?Sized> AssetSource for &S {
    fn read_text(&self, asset: &Path) -> Result<String, AccessError> {
        (**self).read_text(asset)
    }
}

impl<S: AssetSource + ?Sized> AssetSource for std::sync::Arc<S> {
    fn read_text(&self, asset: &Path) -> Result<String, AccessError> {
        (**self).read_text(asset)
    }
}
