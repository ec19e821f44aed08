//! Impls - `AssetSource` implementations.
//!
//! - **FsAssetSource**: reads from the local filesystem
//! - **InMemoryAssetSource**: path → text map for tests and dry runs

pub mod fs_source;
pub mod inmem_source;

pub use self::fs_source::FsAssetSource;
pub use self::inmem_source::InMemoryAssetSource;
