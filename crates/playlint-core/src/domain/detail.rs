//! ListingDetail: the text assets of a store listing and their limits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::limit::LengthLimit;

/// A listing text asset.
///
/// Each variant knows the file name it is stored under and the length
/// ceiling the Play Console enforces for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ListingDetail {
    Title,
    ShortDescription,
    FullDescription,
    Video,
    WhatsNew,
    ContactEmail,
    ContactPhone,
    ContactWebsite,
    DefaultLanguage,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown listing detail '{0}'")]
pub struct UnknownDetail(pub String);

impl ListingDetail {
    pub const ALL: [ListingDetail; 9] = [
        ListingDetail::Title,
        ListingDetail::ShortDescription,
        ListingDetail::FullDescription,
        ListingDetail::Video,
        ListingDetail::WhatsNew,
        ListingDetail::ContactEmail,
        ListingDetail::ContactPhone,
        ListingDetail::ContactWebsite,
        ListingDetail::DefaultLanguage,
    ];

    pub const fn file_name(self) -> &'static str {
        match self {
            ListingDetail::Title => "title",
            ListingDetail::ShortDescription => "shortdescription",
            ListingDetail::FullDescription => "fulldescription",
            ListingDetail::Video => "video",
            ListingDetail::WhatsNew => "whatsnew",
            ListingDetail::ContactEmail => "contactEmail",
            ListingDetail::ContactPhone => "contactPhone",
            ListingDetail::ContactWebsite => "contactWebsite",
            ListingDetail::DefaultLanguage => "defaultLanguage",
        }
    }

    /// Name used on the command line.
    pub const fn kebab_name(self) -> &'static str {
        match self {
            ListingDetail::Title => "title",
            ListingDetail::ShortDescription => "short-description",
            ListingDetail::FullDescription => "full-description",
            ListingDetail::Video => "video",
            ListingDetail::WhatsNew => "whats-new",
            ListingDetail::ContactEmail => "contact-email",
            ListingDetail::ContactPhone => "contact-phone",
            ListingDetail::ContactWebsite => "contact-website",
            ListingDetail::DefaultLanguage => "default-language",
        }
    }

    pub const fn max_length(self) -> LengthLimit {
        match self {
            ListingDetail::Title => LengthLimit::new(50),
            ListingDetail::ShortDescription => LengthLimit::new(80),
            ListingDetail::FullDescription => LengthLimit::new(4000),
            ListingDetail::WhatsNew => LengthLimit::new(500),
            ListingDetail::Video
            | ListingDetail::ContactEmail
            | ListingDetail::ContactPhone
            | ListingDetail::ContactWebsite
            | ListingDetail::DefaultLanguage => LengthLimit::UNLIMITED,
        }
    }
}

impl fmt::Display for ListingDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kebab_name())
    }
}

/// Accepts either the file name (`shortdescription`) or the kebab-case
/// name (`short-description`).
impl FromStr for ListingDetail {
    type Err = UnknownDetail;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ListingDetail::ALL
            .into_iter()
            .find(|d| d.file_name() == s || d.kebab_name() == s)
            .ok_or_else(|| UnknownDetail(s.to_string()))
    }
}

impl Serialize for ListingDetail {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.file_name())
    }
}

impl<'de> Deserialize<'de> for ListingDetail {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::title(ListingDetail::Title, 50)]
    #[case::short_description(ListingDetail::ShortDescription, 80)]
    #[case::full_description(ListingDetail::FullDescription, 4000)]
    #[case::whats_new(ListingDetail::WhatsNew, 500)]
    fn capped_details_have_store_limits(#[case] detail: ListingDetail, #[case] max: usize) {
        assert_eq!(detail.max_length(), LengthLimit::new(max));
    }

    #[test]
    fn contact_details_are_unlimited() {
        assert!(ListingDetail::ContactEmail.max_length().is_unlimited());
        assert!(ListingDetail::DefaultLanguage.max_length().is_unlimited());
    }

    #[rstest]
    #[case::file_name("shortdescription")]
    #[case::kebab("short-description")]
    fn parses_both_names(#[case] input: &str) {
        assert_eq!(input.parse::<ListingDetail>(), Ok(ListingDetail::ShortDescription));
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "subtitle".parse::<ListingDetail>().unwrap_err();
        assert_eq!(err, UnknownDetail("subtitle".to_string()));
    }

    #[test]
    fn serializes_as_file_name() {
        let s = serde_json::to_string(&ListingDetail::ContactEmail).unwrap();
        assert_eq!(s, "\"contactEmail\"");
        let back: ListingDetail = serde_json::from_str(&s).unwrap();
        assert_eq!(back, ListingDetail::ContactEmail);
    }
}
