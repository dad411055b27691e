//! HTTP entity tag utilities.
//!
//! This crate provides:
//! - Content tags (length + truncated SHA-1 digest) and metadata tags
//!   (size + modification time)
//! - Decoding of previously issued tags back into their fields
//! - `If-Match` / `If-None-Match` evaluation
//! - WASM bindings for browser and Deno usage
//!
//! # Example
//!
//! ```
//! use etag_core::{decode, encode, if_match, if_none_match};
//!
//! let tag = encode("deno911", false);
//! assert_eq!(tag, "\"7-ItH+nJ0fm3jUxP77IhQERBClz10\"");
//!
//! let decoded = decode(&tag).unwrap();
//! assert_eq!(decoded.size, 7);
//! assert!(!decoded.weak);
//!
//! assert!(if_match(&tag, "deno911", false));
//! assert!(!if_none_match(&tag, "deno911", false));
//! ```

#![warn(missing_docs)]

mod codec;
mod entity;
mod error;
mod header;
mod matcher;
mod options;
mod tag;
pub mod batch;

#[cfg(feature = "wasm")]
mod wasm;

pub use batch::encode_batch;
pub use codec::{
    decode, encode, try_decode, DecodedTag, ETAG_EMPTY, HASH_LENGTH, MAX_TIMESTAMP_HEX_LENGTH,
};
pub use entity::{Entity, FileStat};
pub use error::{EtagError, EtagErrorCode, Result};
pub use header::{is_wildcard, parse_tag_list};
pub use matcher::{if_match, if_none_match};
pub use options::Options;
pub use tag::{strong_eq, weak_eq, EntityTag};
