//! Domain model (limits, listing details, verdicts, text normalization).

pub mod detail;
pub mod limit;
pub mod text;
pub mod verdict;

pub use detail::{ListingDetail, UnknownDetail};
pub use limit::LengthLimit;
pub use text::{normalize, trimmed_length};
pub use verdict::Verdict;
