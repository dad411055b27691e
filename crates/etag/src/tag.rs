//! Typed entity tags and RFC 9110 comparison functions.

use std::fmt;
use std::str::FromStr;

use crate::codec::WEAK_PREFIX;
use crate::EtagError;

/// A parsed entity tag.
///
/// Parsing is strict: the opaque part must be enclosed in double quotes
/// and must not contain a quote itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityTag {
    /// `W/` prefix present
    pub weak: bool,
    /// Text between the quotes
    pub opaque: String,
}

impl EntityTag {
    /// Creates a strong tag.
    pub fn strong(opaque: impl Into<String>) -> Self {
        Self {
            weak: false,
            opaque: opaque.into(),
        }
    }

    /// Creates a weak tag.
    pub fn weak(opaque: impl Into<String>) -> Self {
        Self {
            weak: true,
            opaque: opaque.into(),
        }
    }
}

impl FromStr for EntityTag {
    type Err = EtagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (weak, quoted) = match trimmed.strip_prefix(WEAK_PREFIX) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let opaque = quoted
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .filter(|opaque| !opaque.contains('"'))
            .ok_or_else(|| EtagError::MalformedTag(s.to_string()))?;

        Ok(Self {
            weak,
            opaque: opaque.to_string(),
        })
    }
}

impl fmt::Display for EntityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.weak {
            f.write_str(WEAK_PREFIX)?;
        }
        write!(f, "\"{}\"", self.opaque)
    }
}

/// Strong comparison: both tags strong with identical opaque parts.
pub fn strong_eq(a: &EntityTag, b: &EntityTag) -> bool {
    !a.weak && !b.weak && a.opaque == b.opaque
}

/// Weak comparison: identical opaque parts, weakness ignored.
pub fn weak_eq(a: &EntityTag, b: &EntityTag) -> bool {
    a.opaque == b.opaque
}
