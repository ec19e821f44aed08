//! LengthValidator - does an asset's trimmed text fit within its limit?
//!
//! The decision is a plain comparison. Content that is too long yields
//! `Ok(false)`; an asset that cannot be read yields `Err(AccessError)`.

use std::path::Path;

use tracing::debug;

use crate::domain::{LengthLimit, ListingDetail, Verdict, trimmed_length};
use crate::error::AccessError;
use crate::impls::FsAssetSource;
use crate::ports::AssetSource;

/// Validator decides whether an asset passes a single rule.
///
/// # Usage
/// ```ignore
/// let validator = LengthValidator::for_detail(ListingDetail::ShortDescription);
/// if !validator.validate(Path::new("en-US/shortdescription"))? {
///     // caller reports the violation
/// }
/// ```
pub trait Validator<A: ?Sized> {
    type Error;

    fn validate(&self, asset: &A) -> Result<bool, Self::Error>;
}

/// Checks trimmed text length against a fixed `LengthLimit`.
///
/// Stateless and `Send + Sync` when its source is, so one instance can be
/// shared by concurrent callers.
#[derive(Debug, Clone)]
pub struct LengthValidator<S = FsAssetSource> {
    limit: LengthLimit,
    source: S,
}

impl LengthValidator<FsAssetSource> {
    pub fn new(limit: LengthLimit) -> Self {
        Self::with_source(limit, FsAssetSource)
    }

    pub fn for_detail(detail: ListingDetail) -> Self {
        Self::new(detail.max_length())
    }
}

impl<S: AssetSource> LengthValidator<S> {
    pub fn with_source(limit: LengthLimit, source: S) -> Self {
        Self { limit, source }
    }

    pub fn max_length(&self) -> LengthLimit {
        self.limit
    }

    /// `Ok(true)` iff the asset's trimmed length is at most the limit.
    pub fn validate(&self, asset: &Path) -> Result<bool, AccessError> {
        self.check(asset).map(|verdict| verdict.is_within())
    }

    /// Like `validate`, but keeps the measured length.
    pub fn check(&self, asset: &Path) -> Result<Verdict, AccessError> {
        let text = self.source.read_text(asset)?;
        let verdict = self.check_text(&text);
        debug!(
            asset = %asset.display(),
            length = verdict.length(),
            limit = %self.limit,
            within = verdict.is_within(),
            "checked asset length"
        );
        Ok(verdict)
    }

    pub fn validate_text(&self, text: &str) -> bool {
        self.check_text(text).is_within()
    }

    pub fn check_text(&self, text: &str) -> Verdict {
        Verdict::evaluate(trimmed_length(text), self.limit)
    }
}

impl<S: AssetSource> Validator<Path> for LengthValidator<S> {
    type Error = AccessError;

    fn validate(&self, asset: &Path) -> Result<bool, AccessError> {
        LengthValidator::validate(self, asset)
    }
}
