//! LengthLimit: the maximum trimmed length allowed for an asset.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Maximum number of characters (Unicode scalar values) an asset may hold
/// after normalization.
///
/// Serialized as a number, or `null` when unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LengthLimit(usize);

impl LengthLimit {
    /// No ceiling. Used by listing details Google does not cap.
    pub const UNLIMITED: LengthLimit = LengthLimit(usize::MAX);

    pub const fn new(max: usize) -> Self {
        Self(max)
    }

    pub const fn get(self) -> usize {
        self.0
    }

    pub const fn is_unlimited(self) -> bool {
        self.0 == usize::MAX
    }

    /// Inclusive: a length equal to the limit is allowed.
    pub const fn allows(self, length: usize) -> bool {
        length <= self.0
    }

    /// `None` when unlimited.
    pub const fn as_option(self) -> Option<usize> {
        if self.is_unlimited() { None } else { Some(self.0) }
    }
}

impl Serialize for LengthLimit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_option().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LengthLimit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let max = Option::<usize>::deserialize(deserializer)?;
        Ok(max.map_or(LengthLimit::UNLIMITED, LengthLimit))
    }
}

impl From<usize> for LengthLimit {
    fn from(max: usize) -> Self {
        Self(max)
    }
}

impl fmt::Display for LengthLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unlimited() {
            f.write_str("unlimited")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
