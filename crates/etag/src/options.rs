//! Tag generation options.

use serde::{Deserialize, Serialize};

/// Options for [`encode`](crate::encode).
///
/// A plain `bool` converts into options with only `weak` set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Force the `W/` prefix
    pub weak: bool,
    /// Tag from size and modification time even for content entities
    pub stat_tag: bool,
}

impl Options {
    /// Options producing a weak tag.
    pub fn weak() -> Self {
        Self {
            weak: true,
            ..Self::default()
        }
    }

    /// Options forcing a metadata tag.
    pub fn stat_tag() -> Self {
        Self {
            stat_tag: true,
            ..Self::default()
        }
    }

    /// Sets the weak flag.
    pub fn with_weak(mut self, weak: bool) -> Self {
        self.weak = weak;
        self
    }

    /// Sets the metadata tag flag.
    pub fn with_stat_tag(mut self, stat_tag: bool) -> Self {
        self.stat_tag = stat_tag;
        self
    }
}

impl From<bool> for Options {
    fn from(weak: bool) -> Self {
        Self::default().with_weak(weak)
    }
}
