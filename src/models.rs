//! Core data types shared across langprofile

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Candidate language identifier, usually an ISO 639-1 code like `en`.
///
/// Opaque to the classifier: it is only compared for equality and printed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Language {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.is_empty() || code.chars().any(char::is_whitespace) {
            return Err(BuildError::InvalidLanguage(s.to_string()));
        }
        Ok(Self(code.to_string()))
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// One candidate with its restricted distance to a query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked {
    pub language: Language,
    pub distance: f64,
}

/// Errors raised while building a model. All of them are fatal: no partial
/// model is ever returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("n-gram order must be at least 1")]
    InvalidOrder,

    #[error("no n-gram orders requested")]
    NoOrders,

    #[error("no training corpora supplied")]
    EmptyCorpora,

    #[error("no candidate languages configured")]
    NoLanguages,

    #[error("language '{0}' is configured more than once")]
    DuplicateLanguage(Language),

    #[error("invalid language identifier '{0}'")]
    InvalidLanguage(String),

    #[error("training corpora contain no {order}-grams")]
    EmptyVocabulary { order: usize },

    #[error("training corpus for '{language}' yields no {order}-grams")]
    DegenerateProfile { language: Language, order: usize },
}

/// The query produced no n-gram known to the vocabulary, so every distance
/// would be computed over zero dimensions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("undecidable: text contains no known {order}-grams")]
pub struct Undecidable {
    pub order: usize,
}
