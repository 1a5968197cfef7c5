//! Block identifier normalization
//!
//! Notion accepts block ids both in dashed UUID form and as bare 32-character
//! hex strings. Everything past the HTTP boundary works with the bare,
//! lowercase form.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

static BLOCK_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-f0-9]{32}$").expect("block id pattern compiles"));

/// Rejected block identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockIdError {
    /// The input is not 32 hex characters once hyphens are removed
    #[error("Invalid block ID format: {provided}")]
    InvalidFormat {
        /// The raw input, kept for diagnostics
        provided: String,
    },
}

/// A validated, normalized Notion block id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockId(String);

impl BlockId {
    /// Strip hyphens and validate the result as 32 hex characters.
    pub fn parse(raw: &str) -> Result<Self, BlockIdError> {
        let clean: String = raw.chars().filter(|c| *c != '-').collect();
        if BLOCK_ID_PATTERN.is_match(&clean) {
            Ok(Self(clean.to_ascii_lowercase()))
        } else {
            Err(BlockIdError::InvalidFormat {
                provided: raw.to_string(),
            })
        }
    }

    /// Normalized id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for BlockId {
    type Err = BlockIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BlockId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for BlockId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
