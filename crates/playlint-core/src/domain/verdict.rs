//! Verdict: the result of comparing an asset's trimmed length to its limit.

use serde::{Deserialize, Serialize};

use super::limit::LengthLimit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    WithinLimit { length: usize, limit: LengthLimit },
    ExceedsLimit { length: usize, limit: LengthLimit },
}

impl Verdict {
    pub fn evaluate(length: usize, limit: LengthLimit) -> Self {
        if limit.allows(length) {
            Verdict::WithinLimit { length, limit }
        } else {
            Verdict::ExceedsLimit { length, limit }
        }
    }

    pub fn is_within(&self) -> bool {
        matches!(self, Verdict::WithinLimit { .. })
    }

    pub fn length(&self) -> usize {
        match self {
            Verdict::WithinLimit { length, .. } | Verdict::ExceedsLimit { length, .. } => *length,
        }
    }

    pub fn limit(&self) -> LengthLimit {
        match self {
            Verdict::WithinLimit { limit, .. } | Verdict::ExceedsLimit { limit, .. } => *limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_splits_at_limit() {
        let limit = LengthLimit::new(5);
        assert!(Verdict::evaluate(5, limit).is_within());
        assert_eq!(
            Verdict::evaluate(6, limit),
            Verdict::ExceedsLimit { length: 6, limit }
        );
    }

    #[test]
    fn verdict_is_tagged_in_json() {
        let v = Verdict::evaluate(81, LengthLimit::new(80));
        let json = serde_json::to_value(v).unwrap();
        assert_eq!(json["verdict"], "exceeds_limit");
        assert_eq!(json["length"], 81);
        assert_eq!(json["limit"], 80);
    }

    #[test]
    fn unlimited_verdict_round_trips() {
        let v = Verdict::evaluate(10_000, LengthLimit::UNLIMITED);
        let json = serde_json::to_value(v).unwrap();
        assert!(json["limit"].is_null());
        let back: Verdict = serde_json::from_value(json).unwrap();
        assert_eq!(back, v);
    }
}
