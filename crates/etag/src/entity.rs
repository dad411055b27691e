//! Entities that tags are computed from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{EtagError, Result};

/// Input to tag generation.
///
/// The caller decides which variant applies; the codec never inspects the
/// shape of a value to guess whether it is file metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity<'a> {
    /// Text, hashed as its UTF-8 bytes
    Text(&'a str),
    /// Raw bytes
    Bytes(&'a [u8]),
    /// File metadata, tagged without reading content
    Stat(FileStat),
}

impl Entity<'_> {
    /// Byte length for content entities, declared size for metadata.
    pub fn len(&self) -> u64 {
        match self {
            Entity::Text(text) => text.len() as u64,
            Entity::Bytes(bytes) => bytes.len() as u64,
            Entity::Stat(stat) => stat.size,
        }
    }

    /// Returns true if the entity has a length of zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> From<&'a str> for Entity<'a> {
    fn from(text: &'a str) -> Self {
        Entity::Text(text)
    }
}

impl<'a> From<&'a String> for Entity<'a> {
    fn from(text: &'a String) -> Self {
        Entity::Text(text.as_str())
    }
}

impl<'a> From<&'a [u8]> for Entity<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Entity::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Entity<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Entity::Bytes(bytes.as_slice())
    }
}

impl<'a> From<&'a Vec<u8>> for Entity<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Entity::Bytes(bytes.as_slice())
    }
}

impl From<FileStat> for Entity<'_> {
    fn from(stat: FileStat) -> Self {
        Entity::Stat(stat)
    }
}

/// File metadata record used for metadata tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStat {
    /// Size in bytes
    pub size: u64,
    /// Last modification time; the current time is used when absent
    pub mtime: Option<DateTime<Utc>>,
    /// Inode or other file identifier, if the platform has one
    pub ino: Option<u64>,
}

impl FileStat {
    /// Creates a metadata record with a modification time.
    #[inline]
    pub fn new(size: u64, mtime: DateTime<Utc>) -> Self {
        Self {
            size,
            mtime: Some(mtime),
            ino: None,
        }
    }

    /// Sets the file identifier.
    pub fn with_ino(mut self, ino: u64) -> Self {
        self.ino = Some(ino);
        self
    }

    /// Creates a metadata record from an epoch millisecond timestamp.
    ///
    /// A timestamp outside the representable range is an error rather
    /// than a fallback to the current time.
    pub fn from_millis(size: u64, mtime_ms: Option<i64>) -> Result<Self> {
        let mtime = match mtime_ms {
            Some(ms) => Some(
                DateTime::from_timestamp_millis(ms)
                    .ok_or_else(|| EtagError::InvalidTimestamp(ms.to_string()))?,
            ),
            None => None,
        };
        Ok(Self {
            size,
            mtime,
            ino: None,
        })
    }
}

impl From<&std::fs::Metadata> for FileStat {
    fn from(metadata: &std::fs::Metadata) -> Self {
        Self {
            size: metadata.len(),
            mtime: metadata.modified().ok().map(DateTime::<Utc>::from),
            ino: inode(metadata),
        }
    }
}

#[cfg(unix)]
fn inode(metadata: &std::fs::Metadata) -> Option<u64> {
    use std::os::unix::fs::MetadataExt;
    Some(metadata.ino())
}

#[cfg(not(unix))]
fn inode(_metadata: &std::fs::Metadata) -> Option<u64> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_from_text() {
        let entity: Entity = "hello".into();
        assert_eq!(entity, Entity::Text("hello"));
        assert_eq!(entity.len(), 5);
    }

    #[test]
    fn test_entity_from_bytes() {
        let data = vec![1u8, 2, 3];
        let entity: Entity = (&data).into();
        assert_eq!(entity.len(), 3);

        let entity: Entity = b"".into();
        assert!(entity.is_empty());
    }

    #[test]
    fn test_stat_len_is_declared_size() {
        let stat = FileStat::new(4096, DateTime::from_timestamp_millis(0).unwrap()).with_ino(42);
        let entity = Entity::from(stat);
        assert!(matches!(entity, Entity::Stat(_)));
        assert_eq!(entity.len(), 4096);
        assert_eq!(stat.ino, Some(42));
    }

    #[test]
    fn test_stat_from_millis() {
        let stat = FileStat::from_millis(20, Some(0x18a2f3)).unwrap();
        assert_eq!(stat.mtime.unwrap().timestamp_millis(), 0x18a2f3);

        let stat = FileStat::from_millis(20, None).unwrap();
        assert!(stat.mtime.is_none());
    }

    #[test]
    fn test_stat_from_millis_out_of_range() {
        let err = FileStat::from_millis(1, Some(i64::MAX)).unwrap_err();
        assert_eq!(err, EtagError::InvalidTimestamp(i64::MAX.to_string()));
    }

    #[test]
    fn test_stat_from_fs_metadata() {
        let path = std::env::temp_dir().join("etag-core-entity-test.txt");
        std::fs::write(&path, b"twelve bytes").unwrap();
        let metadata = std::fs::metadata(&path).unwrap();
        let stat = FileStat::from(&metadata);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(stat.size, 12);
        assert!(stat.mtime.is_some());
        #[cfg(unix)]
        assert!(stat.ino.is_some());
    }
}
