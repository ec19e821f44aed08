//! Per-asset results and how they are rendered.

use std::path::{Path, PathBuf};

use playlint_core::{AccessError, LengthLimit, ListingDetail, Verdict};
use serde::Serialize;

pub const EXIT_OK: u8 = 0;
pub const EXIT_TOO_LONG: u8 = 1;
pub const EXIT_UNREADABLE: u8 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AssetStatus {
    Passed { length: usize, limit: LengthLimit },
    TooLong { length: usize, limit: LengthLimit },
    Unreadable { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct AssetReport {
    pub path: PathBuf,
    pub detail: ListingDetail,
    #[serde(flatten)]
    pub status: AssetStatus,
}

impl AssetReport {
    pub fn from_check(
        path: &Path,
        detail: ListingDetail,
        result: Result<Verdict, AccessError>,
    ) -> Self {
        let status = match result {
            Ok(Verdict::WithinLimit { length, limit }) => AssetStatus::Passed { length, limit },
            Ok(Verdict::ExceedsLimit { length, limit }) => AssetStatus::TooLong { length, limit },
            Err(e) => AssetStatus::Unreadable {
                error: e.to_string(),
            },
        };
        Self {
            path: path.to_path_buf(),
            detail,
            status,
        }
    }

    /// Report for an asset whose check never completed.
    pub fn incomplete(path: &Path, detail: ListingDetail) -> Self {
        Self {
            path: path.to_path_buf(),
            detail,
            status: AssetStatus::Unreadable {
                error: "validation did not complete".to_string(),
            },
        }
    }

    pub fn render_text(&self) -> String {
        let path = self.path.display();
        match &self.status {
            AssetStatus::Passed { length, limit } => {
                format!("PASS  {path} ({length}/{limit})")
            }
            AssetStatus::TooLong { length, limit } => format!(
                "FAIL  {path}: {} has {length} characters, limit is {limit}",
                self.detail
            ),
            AssetStatus::Unreadable { error } => format!("ERROR {path}: {error}"),
        }
    }
}

/// Unreadable assets outrank oversized ones.
pub fn exit_code(reports: &[AssetReport]) -> u8 {
    let unreadable = reports
        .iter()
        .any(|r| matches!(r.status, AssetStatus::Unreadable { .. }));
    let too_long = reports
        .iter()
        .any(|r| matches!(r.status, AssetStatus::TooLong { .. }));

    if unreadable {
        EXIT_UNREADABLE
    } else if too_long {
        EXIT_TOO_LONG
    } else {
        EXIT_OK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn report(status: AssetStatus) -> AssetReport {
        AssetReport {
            path: PathBuf::from("en-US/listing/shortdescription"),
            detail: ListingDetail::ShortDescription,
            status,
        }
    }

    fn passed() -> AssetStatus {
        AssetStatus::Passed {
            length: 12,
            limit: LengthLimit::new(80),
        }
    }

    fn too_long() -> AssetStatus {
        AssetStatus::TooLong {
            length: 81,
            limit: LengthLimit::new(80),
        }
    }

    fn unreadable() -> AssetStatus {
        AssetStatus::Unreadable {
            error: "file 'x' does not exist".to_string(),
        }
    }

    #[rstest]
    #[case::none(vec![], EXIT_OK)]
    #[case::all_pass(vec![passed(), passed()], EXIT_OK)]
    #[case::one_too_long(vec![passed(), too_long()], EXIT_TOO_LONG)]
    #[case::unreadable_wins(vec![too_long(), unreadable()], EXIT_UNREADABLE)]
    fn exit_code_reflects_worst_status(#[case] statuses: Vec<AssetStatus>, #[case] code: u8) {
        let reports: Vec<_> = statuses.into_iter().map(report).collect();
        assert_eq!(exit_code(&reports), code);
    }

    #[test]
    fn access_errors_become_unreadable() {
        let err = AccessError::NotFound {
            path: PathBuf::from("x"),
        };
        let r = AssetReport::from_check(Path::new("x"), ListingDetail::Title, Err(err));
        assert_eq!(r.status, unreadable());
    }

    #[test]
    fn text_names_detail_and_limit() {
        assert_eq!(
            report(too_long()).render_text(),
            "FAIL  en-US/listing/shortdescription: short-description has 81 characters, limit is 80"
        );
        assert_eq!(
            report(passed()).render_text(),
            "PASS  en-US/listing/shortdescription (12/80)"
        );
    }

    #[test]
    fn incomplete_check_is_unreadable() {
        let r = AssetReport::incomplete(Path::new("x"), ListingDetail::Title);
        assert!(matches!(r.status, AssetStatus::Unreadable { .. }));
        assert_eq!(exit_code(&[r]), EXIT_UNREADABLE);
    }

    #[test]
    fn unlimited_limit_is_null_in_json() {
        let r = report(AssetStatus::Passed {
            length: 3000,
            limit: LengthLimit::UNLIMITED,
        });
        let v = serde_json::to_value(r).unwrap();
        assert_eq!(v["status"], "passed");
        assert!(v["limit"].is_null());
    }

    #[test]
    fn json_is_flat() {
        let v = serde_json::to_value(report(too_long())).unwrap();
        assert_eq!(v["status"], "too_long");
        assert_eq!(v["detail"], "shortdescription");
        assert_eq!(v["length"], 81);
        assert_eq!(v["limit"], 80);
    }
}
