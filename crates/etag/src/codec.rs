//! Entity tag encoding and decoding.
//!
//! Tags have the wire form `["W/"] '"' <size-hex> '-' <segment> '"'` where
//! the segment is either a truncated base64 SHA-1 digest of the content or
//! the modification time in hex epoch milliseconds.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

use crate::{Entity, EtagError, Options, Result};

/// Tag of a zero-length content entity (SHA-1 of no bytes).
pub const ETAG_EMPTY: &str = "\"0-2jmj7l5rSw0yVb/vlWAYkK/YBwk\"";

/// Number of base64 digest characters kept in a content tag.
pub const HASH_LENGTH: usize = 27;

/// Longest second segment that decodes as a timestamp.
///
/// Content tags from other generators with a short digest segment are
/// read as metadata tags. There is no way to tell the two apart from the
/// tag alone.
pub const MAX_TIMESTAMP_HEX_LENGTH: usize = 12;

pub(crate) const WEAK_PREFIX: &str = "W/";

/// Fields recovered from an entity tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedTag {
    /// Tag carried the `W/` prefix
    pub weak: bool,
    /// The tag as given
    pub etag: String,
    /// Content length or declared file size
    pub size: u64,
    /// Modification time for metadata tags
    pub mtime: Option<DateTime<Utc>>,
    /// Digest prefix for content tags
    pub hash: Option<String>,
}

impl DecodedTag {
    /// Returns true if the tag was built from file metadata.
    pub fn is_stat(&self) -> bool {
        self.mtime.is_some()
    }
}

/// Generate an entity tag.
///
/// # Arguments
/// * `entity` - Text, bytes or file metadata
/// * `options` - [`Options`], or a `bool` for the weak flag
///
/// # Returns
/// Quoted tag, prefixed with `W/` for metadata tags or when weak is requested
///
/// # Example
/// ```
/// use etag_core::{encode, Options, ETAG_EMPTY};
///
/// assert_eq!(encode("", Options::default()), ETAG_EMPTY);
/// assert!(encode("hello", true).starts_with("W/\"5-"));
/// ```
pub fn encode<'a>(entity: impl Into<Entity<'a>>, options: impl Into<Options>) -> String {
    let entity = entity.into();
    let options = options.into();

    let tag = match entity {
        Entity::Stat(stat) => return weaken(stat_tag(stat.size, stat.mtime)),
        _ if options.stat_tag => return weaken(stat_tag(entity.len(), None)),
        _ if entity.is_empty() => ETAG_EMPTY.to_string(),
        Entity::Text(text) => content_tag(text.as_bytes()),
        Entity::Bytes(bytes) => content_tag(bytes),
    };

    if options.weak {
        weaken(tag)
    } else {
        tag
    }
}

/// Decode a tag, returning `None` when it cannot be read.
///
/// Decoding is lossy: only the size and the timestamp or digest prefix are
/// recovered.
pub fn decode(etag: &str) -> Option<DecodedTag> {
    try_decode(etag).ok()
}

/// Decode a tag, reporting why it cannot be read.
///
/// # Example
/// ```
/// use etag_core::try_decode;
///
/// let decoded = try_decode("W/\"14-18a2f3\"").unwrap();
/// assert!(decoded.weak);
/// assert_eq!(decoded.size, 20);
/// assert_eq!(decoded.mtime.unwrap().timestamp_millis(), 0x18a2f3);
/// assert!(decoded.hash.is_none());
/// ```
pub fn try_decode(etag: &str) -> Result<DecodedTag> {
    let (weak, quoted) = match etag.strip_prefix(WEAK_PREFIX) {
        Some(rest) => (true, rest),
        None => (false, etag),
    };
    let unquoted = quoted.strip_prefix('"').unwrap_or(quoted);
    let payload = unquoted.strip_suffix('"').unwrap_or(unquoted);

    let (size_hex, segment) = payload
        .split_once('-')
        .ok_or_else(|| EtagError::MalformedTag(etag.to_string()))?;

    let size = parse_size(size_hex).ok_or_else(|| EtagError::MalformedTag(etag.to_string()))?;

    let (mtime, hash) = if segment.chars().count() <= MAX_TIMESTAMP_HEX_LENGTH {
        (Some(parse_millis(segment)?), None)
    } else {
        (None, Some(segment.to_string()))
    };

    Ok(DecodedTag {
        weak,
        etag: etag.to_string(),
        size,
        mtime,
        hash,
    })
}

fn content_tag(bytes: &[u8]) -> String {
    format!("\"{:x}-{}\"", bytes.len(), digest_prefix(bytes))
}

fn stat_tag(size: u64, mtime: Option<DateTime<Utc>>) -> String {
    let millis = mtime.unwrap_or_else(Utc::now).timestamp_millis();
    format!("\"{:x}-{}\"", size, hex_millis(millis))
}

fn weaken(tag: String) -> String {
    format!("{WEAK_PREFIX}{tag}")
}

fn digest_prefix(bytes: &[u8]) -> String {
    let mut encoded = STANDARD.encode(Sha1::digest(bytes));
    encoded.truncate(HASH_LENGTH);
    encoded
}

fn hex_millis(millis: i64) -> String {
    if millis < 0 {
        format!("-{:x}", millis.unsigned_abs())
    } else {
        format!("{:x}", millis)
    }
}

/// Leading hex digits of the segment; no digits reads as zero.
fn parse_size(segment: &str) -> Option<u64> {
    let end = segment
        .find(|c: char| !c.is_ascii_hexdigit())
        .unwrap_or(segment.len());
    match &segment[..end] {
        "" => Some(0),
        digits => u64::from_str_radix(digits, 16).ok(),
    }
}

fn parse_millis(segment: &str) -> Result<DateTime<Utc>> {
    i64::from_str_radix(segment, 16)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .ok_or_else(|| EtagError::InvalidTimestamp(segment.to_string()))
}
