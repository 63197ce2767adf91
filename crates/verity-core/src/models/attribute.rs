use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::VerityError;

/// The six categorical attributes recorded for every article.
///
/// Each attribute draws its values from a small closed vocabulary. Only
/// the attributes listed in the model config take part in estimation;
/// the rest are carried as inert fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Whether the article comes from a well known source.
    SourceTrust,
    /// Article length bucket.
    LengthBucket,
    /// Headline structure.
    Headline,
    /// Fake-news activity level at publication time.
    DatePublished,
    /// Author reputation.
    Author,
    /// How common the article's political keywords are in fabricated articles.
    KeywordDensity,
}

impl Attribute {
    /// All attributes in feature-vector order.
    pub const ALL: [Attribute; 6] = [
        Attribute::SourceTrust,
        Attribute::LengthBucket,
        Attribute::Headline,
        Attribute::DatePublished,
        Attribute::Author,
        Attribute::KeywordDensity,
    ];

    /// Attributes the estimator models when no config overrides it.
    pub const DEFAULT_MODELED: [Attribute; 3] = [
        Attribute::SourceTrust,
        Attribute::LengthBucket,
        Attribute::KeywordDensity,
    ];

    /// Snake-case name, as used in config files and reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::SourceTrust => "source_trust",
            Self::LengthBucket => "length_bucket",
            Self::Headline => "headline",
            Self::DatePublished => "date_published",
            Self::Author => "author",
            Self::KeywordDensity => "keyword_density",
        }
    }

    /// The closed set of recognized values for this attribute.
    pub fn vocabulary(self) -> &'static [&'static str] {
        match self {
            Self::SourceTrust => &["trusted", "unreliable"],
            Self::LengthBucket => &["short", "average", "long"],
            Self::Headline => &["standard", "unusual"],
            Self::DatePublished => &["low", "average", "high"],
            Self::Author => &["trusted", "unreliable"],
            Self::KeywordDensity => &["rare", "unindicative", "common"],
        }
    }

    /// Whether `value` belongs to this attribute's vocabulary.
    pub fn recognizes(self, value: &str) -> bool {
        self.vocabulary().contains(&value)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = VerityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| VerityError::UnknownAttribute {
                name: s.to_string(),
            })
    }
}
