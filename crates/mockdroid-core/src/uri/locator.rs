//! Data locator (lenient URI reference) carried by an intent.

use std::fmt;
use std::str::FromStr;

use crate::error::{MockDroidError, Result};

/// Opaque URI-like reference to the data an intent operates on.
///
/// The platform parser is famously lenient, so validation is minimal: the
/// text must be non-empty and free of whitespace and control characters.
/// Everything else is carried verbatim and compared structurally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator {
    raw: String,
}

impl Locator {
    /// Parse a locator from text.
    pub fn parse(s: &str) -> Result<Locator> {
        if s.is_empty() {
            return Err(MockDroidError::malformed(s, 0, "empty data locator"));
        }
        if let Some(pos) = s.find(|c: char| c.is_whitespace() || c.is_control()) {
            return Err(MockDroidError::malformed(
                s,
                pos,
                "whitespace or control character in data locator",
            ));
        }
        Ok(Locator { raw: s.to_string() })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The leading scheme, if the locator starts with a run of ASCII
    /// letters/digits/`.`/`-` followed by `:`.
    pub fn scheme(&self) -> Option<&str> {
        let colon = self.raw.find(':')?;
        if colon == 0 {
            return None;
        }
        let head = &self.raw[..colon];
        if head
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            Some(head)
        } else {
            None
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Locator {
    type Err = MockDroidError;

    fn from_str(s: &str) -> Result<Self> {
        Locator::parse(s)
    }
}
