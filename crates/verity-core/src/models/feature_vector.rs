use serde::{Deserialize, Serialize};

use super::Attribute;
use crate::constants::UNKNOWN_VALUE;

/// Categorical description of one article.
///
/// Values are free strings. Anything outside an attribute's vocabulary
/// (including the `"unknown"` sentinel) simply matches no bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureVector {
    source_trust: String,
    length_bucket: String,
    headline: String,
    date_published: String,
    author: String,
    keyword_density: String,
}

impl FeatureVector {
    /// Build a vector from explicit values, in feature-vector order.
    pub fn new(
        source_trust: impl Into<String>,
        length_bucket: impl Into<String>,
        headline: impl Into<String>,
        date_published: impl Into<String>,
        author: impl Into<String>,
        keyword_density: impl Into<String>,
    ) -> Self {
        Self {
            source_trust: source_trust.into(),
            length_bucket: length_bucket.into(),
            headline: headline.into(),
            date_published: date_published.into(),
            author: author.into(),
            keyword_density: keyword_density.into(),
        }
    }

    /// A vector with every attribute set to the `"unknown"` sentinel.
    pub fn unknown() -> Self {
        Self::new(
            UNKNOWN_VALUE,
            UNKNOWN_VALUE,
            UNKNOWN_VALUE,
            UNKNOWN_VALUE,
            UNKNOWN_VALUE,
            UNKNOWN_VALUE,
        )
    }

    /// Return a copy with one attribute replaced.
    pub fn with(mut self, attribute: Attribute, value: impl Into<String>) -> Self {
        *self.slot_mut(attribute) = value.into();
        self
    }

    pub fn get(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::SourceTrust => &self.source_trust,
            Attribute::LengthBucket => &self.length_bucket,
            Attribute::Headline => &self.headline,
            Attribute::DatePublished => &self.date_published,
            Attribute::Author => &self.author,
            Attribute::KeywordDensity => &self.keyword_density,
        }
    }

    /// Aggregation predicate: exact equality, except the sentinel never matches.
    pub fn matches(&self, attribute: Attribute, value: &str) -> bool {
        value != UNKNOWN_VALUE && self.get(attribute) == value
    }

    pub fn is_unknown(&self, attribute: Attribute) -> bool {
        self.get(attribute) == UNKNOWN_VALUE
    }

    fn slot_mut(&mut self, attribute: Attribute) -> &mut String {
        match attribute {
            Attribute::SourceTrust => &mut self.source_trust,
            Attribute::LengthBucket => &mut self.length_bucket,
            Attribute::Headline => &mut self.headline,
            Attribute::DatePublished => &mut self.date_published,
            Attribute::Author => &mut self.author,
            Attribute::KeywordDensity => &mut self.keyword_density,
        }
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::unknown()
    }
}
