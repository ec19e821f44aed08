//! Ports - seams to the caller's storage.
//!
//! The validator only needs read access to an asset's text. Everything else
//! (discovery, locales, packaging) stays with the caller.

pub mod asset_source;

pub use self::asset_source::AssetSource;
