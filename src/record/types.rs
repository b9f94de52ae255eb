use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// A single maintainer entry of a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Maintainer {
    pub name: String,
    pub email: String,
}

/// A validated application metadata record.
///
/// Immutable once constructed and shared across the field indexes via `Arc`
/// rather than copied. Field names double as the YAML keys of the wire
/// payload; missing keys decode to empty values so the validator can report
/// them field by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaRecord {
    pub title: String,
    pub version: String,
    pub maintainers: Vec<Maintainer>,
    pub company: String,
    pub website: String,
    pub source: String,
    pub license: String,
    pub description: String,
}

impl MetaRecord {
    /// Every value of this record that belongs under the given search field.
    ///
    /// Scalar fields yield exactly one value; the maintainer fields yield
    /// one value per maintainer. The match is exhaustive, so a new search
    /// field cannot be added without deciding what it extracts.
    pub fn field_values(&self, field: SearchField) -> Vec<&str> {
        match field {
            SearchField::Title => vec![self.title.as_str()],
            SearchField::Version => vec![self.version.as_str()],
            SearchField::MaintainerEmail => {
                self.maintainers.iter().map(|m| m.email.as_str()).collect()
            }
            SearchField::MaintainerName => {
                self.maintainers.iter().map(|m| m.name.as_str()).collect()
            }
            SearchField::Company => vec![self.company.as_str()],
            SearchField::Website => vec![self.website.as_str()],
            SearchField::Source => vec![self.source.as_str()],
            SearchField::License => vec![self.license.as_str()],
            SearchField::Description => vec![self.description.as_str()],
        }
    }
}

/// The closed set of searchable fields.
///
/// The camelCase wire names are the contract of the search API; `Display`
/// and `FromStr` round-trip them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Title,
    Version,
    MaintainerEmail,
    MaintainerName,
    Company,
    Website,
    Source,
    License,
    Description,
}

impl SearchField {
    /// All searchable fields, in a fixed order. Append fans a record out
    /// across exactly this set.
    pub const ALL: [SearchField; 9] = [
        SearchField::Title,
        SearchField::Version,
        SearchField::MaintainerEmail,
        SearchField::MaintainerName,
        SearchField::Company,
        SearchField::Website,
        SearchField::Source,
        SearchField::License,
        SearchField::Description,
    ];

    /// The wire name of the field as it appears in search requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Version => "version",
            SearchField::MaintainerEmail => "maintainerEmail",
            SearchField::MaintainerName => "maintainerName",
            SearchField::Company => "company",
            SearchField::Website => "website",
            SearchField::Source => "source",
            SearchField::License => "license",
            SearchField::Description => "description",
        }
    }

    /// Whether this field is served by the tokenized full-text index.
    /// Only the description is; every other field is exact-match.
    pub fn is_full_text(&self) -> bool {
        matches!(self, SearchField::Description)
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CatalogError::UnsupportedFields {
                fields: vec![s.to_string()],
            })
    }
}
