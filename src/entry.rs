/// The key type of the map. Keys are ordered by the natural order of `i32`.
pub type Key = i32;

/// The value type of the map.
pub type Value = i32;

/// A key-value pair stored in a single node of the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub key: Key,
    pub value: Value,
}

impl Entry {
    pub fn new(key: Key, value: Value) -> Self {
        Entry { key, value }
    }
}

impl From<Entry> for (Key, Value) {
    fn from(entry: Entry) -> Self {
        (entry.key, entry.value)
    }
}

#[cfg(test)]
mod tests {
    use super::Entry;
    use serde_test::{assert_tokens, Token};

    #[test]
    fn test_into_pair() {
        let pair: (i32, i32) = Entry::new(-1, 7).into();
        assert_eq!(pair, (-1, 7));
    }

    #[test]
    fn test_serde_tokens() {
        assert_tokens(
            &Entry::new(3, -30),
            &[
                Token::Struct {
                    name: "Entry",
                    len: 2,
                },
                Token::Str("key"),
                Token::I32(3),
                Token::Str("value"),
                Token::I32(-30),
                Token::StructEnd,
            ],
        );
    }
}
