//! playlint-core
//!
//! Length checks for Play Store listing text assets.
//!
//! # Modules
//! - **domain**: limits, listing details, verdicts, text normalization
//! - **ports**: `AssetSource` (read access to an asset's text)
//! - **impls**: filesystem and in-memory `AssetSource` implementations
//! - **validator**: `LengthValidator` and the `Validator` trait
//! - **reader**: read-and-trim helper with an overflow policy
//! - **config**: `LintConfig` (limit overrides, overflow policy)
//! - **error**: error taxonomy

pub mod config;
pub mod domain;
pub mod error;
pub mod impls;
pub mod ports;
pub mod reader;
pub mod validator;

pub use config::LintConfig;
pub use domain::{LengthLimit, ListingDetail, Verdict};
pub use error::{AccessError, ConfigError, LimitExceeded, PlaylintError};
pub use reader::{OverflowPolicy, read_processed};
pub use validator::{LengthValidator, Validator};
