//! Conditional request evaluation.

use crate::codec::WEAK_PREFIX;
use crate::{encode, is_wildcard, parse_tag_list, Entity, Options};

/// Evaluate an `If-Match` precondition.
///
/// Weak tags never satisfy `If-Match`, not even against `*`. Otherwise
/// `*` matches, and a list matches when it contains the entity's tag
/// exactly.
///
/// # Arguments
/// * `header` - `If-Match` header value
/// * `entity` - Current representation of the resource
/// * `options` - Options passed through to [`encode`]
///
/// # Returns
/// true if the precondition passes
pub fn if_match<'a>(
    header: &str,
    entity: impl Into<Entity<'a>>,
    options: impl Into<Options>,
) -> bool {
    let tag = encode(entity, options);
    if tag.starts_with(WEAK_PREFIX) {
        return false;
    }
    if is_wildcard(header) {
        return true;
    }
    parse_tag_list(header).contains(&tag.as_str())
}

/// Evaluate an `If-None-Match` precondition.
///
/// `*` always fails. Weak tags take part in the comparison.
///
/// # Arguments
/// * `header` - `If-None-Match` header value
/// * `entity` - Current representation of the resource
/// * `options` - Options passed through to [`encode`]
///
/// # Returns
/// true if none of the listed tags matches, i.e. the request may proceed
pub fn if_none_match<'a>(
    header: &str,
    entity: impl Into<Entity<'a>>,
    options: impl Into<Options>,
) -> bool {
    if is_wildcard(header) {
        return false;
    }
    let tag = encode(entity, options);
    !parse_tag_list(header).contains(&tag.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FileStat;
    use chrono::DateTime;
    use proptest::prelude::*;

    fn stat() -> FileStat {
        FileStat::new(20, DateTime::from_timestamp_millis(0x18a2f3).unwrap())
    }

    #[test]
    fn test_if_match_wildcard_strong() {
        assert!(if_match("*", "deno911", false));
        assert!(if_match("*", b"bytes", Options::default()));
        assert!(if_match("*", "", false));
    }

    #[test]
    fn test_if_match_never_weak() {
        assert!(!if_match("*", stat(), false));
        assert!(!if_match("*", "deno911", true));
        assert!(!if_match("W/\"14-18a2f3\"", stat(), false));
        let weak = encode("deno911", true);
        assert!(!if_match(&weak, "deno911", true));
    }

    #[test]
    fn test_if_match_list() {
        let tag = encode("deno911", false);
        let header = format!("\"other\" , {tag},\"more\"");
        assert!(if_match(&header, "deno911", false));
        assert!(!if_match("\"other\", \"more\"", "deno911", false));
    }

    #[test]
    fn test_if_match_is_exact() {
        let tag = encode("deno911", false);
        let unquoted = tag.trim_matches('"');
        assert!(!if_match(unquoted, "deno911", false));
        assert!(!if_match(&format!("W/{tag}"), "deno911", false));
    }

    #[test]
    fn test_if_none_match_wildcard() {
        assert!(!if_none_match("*", "deno911", false));
        assert!(!if_none_match("*", stat(), false));
        assert!(!if_none_match("*", "", true));
    }

    #[test]
    fn test_if_none_match_weak_tags_compare() {
        assert!(!if_none_match("\"x\", W/\"14-18a2f3\"", stat(), false));
        assert!(if_none_match("\"14-18a2f3\"", stat(), false));
    }

    #[test]
    fn test_if_none_match_list() {
        let tag = encode("deno911", false);
        assert!(!if_none_match(&tag, "deno911", false));
        assert!(if_none_match(&tag, "deno912", false));
        assert!(if_none_match("", "deno911", false));
    }

    proptest! {
        #[test]
        fn prop_strong_tag_complementarity(text in ".*") {
            let tag = encode(&text, false);
            prop_assert!(if_match(&tag, &text, false));
            prop_assert!(!if_none_match(&tag, &text, false));
        }

        #[test]
        fn prop_wildcards(data in proptest::collection::vec(any::<u8>(), 0..128)) {
            prop_assert!(if_match("*", &data, false));
            prop_assert!(!if_match("*", &data, true));
            prop_assert!(!if_none_match("*", &data, false));
        }
    }
}
