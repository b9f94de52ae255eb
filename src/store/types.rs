//! Core types of the store's search interface.

use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::record::types::SearchField;

/// How the per-term result sets are combined into one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinMethod {
    /// A record must match every term.
    And,
    /// A record must match at least one term.
    Or,
}

impl JoinMethod {
    /// Wire name of the join method.
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinMethod::And => "and",
            JoinMethod::Or => "or",
        }
    }
}

impl fmt::Display for JoinMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JoinMethod {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "and" => Ok(JoinMethod::And),
            "or" => Ok(JoinMethod::Or),
            other => Err(CatalogError::UnsupportedJoinMethod(other.to_string())),
        }
    }
}

/// One field-scoped query inside a search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    /// Field whose index answers this term.
    pub field: SearchField,
    /// Query handed to that index.
    pub query: String,
}

impl SearchTerm {
    pub fn new(field: SearchField, query: impl Into<String>) -> Self {
        SearchTerm {
            field,
            query: query.into(),
        }
    }
}
