//! Names of machine functions and blocks.
//!
//! Program documents name functions and blocks either by number or by
//! string. The original form is kept so that a stored document writes the
//! name back exactly as it was read.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A function or block name as it appears in the document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Name {
    Number(u64),
    Str(String),
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Name::Number(n) => write!(f, "{}", n),
            Name::Str(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Name {
    fn from(n: u64) -> Self {
        Name::Number(n)
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Name::Str(s.to_string())
    }
}

impl From<String> for Name {
    fn from(s: String) -> Self {
        Name::Str(s)
    }
}
