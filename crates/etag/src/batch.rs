//! Tag generation for many entities at once.
//!
//! Each entity is tagged independently, so the work is spread across
//! threads when the `parallel` feature is enabled.

use crate::{encode, Entity, Options};

/// Generate tags for a slice of entities.
///
/// # Arguments
/// * `entities` - Entities to tag
/// * `options` - Options applied to every entity
///
/// # Returns
/// One tag per entity, in input order.
///
/// # Example
/// ```
/// use etag_core::{encode_batch, Entity, Options, ETAG_EMPTY};
///
/// let entities = [Entity::Text(""), Entity::Bytes(b"abc")];
/// let tags = encode_batch(&entities, Options::default());
/// assert_eq!(tags.len(), 2);
/// assert_eq!(tags[0], ETAG_EMPTY);
/// ```
pub fn encode_batch(entities: &[Entity<'_>], options: Options) -> Vec<String> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        entities
            .par_iter()
            .map(|entity| encode(*entity, options))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        entities
            .iter()
            .map(|entity| encode(*entity, options))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FileStat;
    use chrono::DateTime;

    #[test]
    fn test_batch_preserves_order() {
        let texts: Vec<String> = (0..64).map(|i| format!("entity-{i}")).collect();
        let entities: Vec<Entity> = texts.iter().map(Entity::from).collect();

        let tags = encode_batch(&entities, Options::default());
        assert_eq!(tags.len(), texts.len());
        for (text, tag) in texts.iter().zip(&tags) {
            assert_eq!(*tag, encode(text, false));
        }
    }

    #[test]
    fn test_batch_mixed_entities() {
        let stat = FileStat::new(20, DateTime::from_timestamp_millis(0x18a2f3).unwrap());
        let entities = [Entity::Text("deno911"), Entity::Stat(stat)];

        let tags = encode_batch(&entities, Options::default());
        assert_eq!(tags[0], "\"7-ItH+nJ0fm3jUxP77IhQERBClz10\"");
        assert_eq!(tags[1], "W/\"14-18a2f3\"");
    }

    #[test]
    fn test_batch_empty() {
        assert!(encode_batch(&[], Options::weak()).is_empty());
    }
}
