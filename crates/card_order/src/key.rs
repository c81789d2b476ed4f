use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a card. Integer and string keys never compare equal, so `1`
/// and `"1"` are distinct cards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardKey {
    Int(i64),
    Str(String),
}

impl fmt::Display for CardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardKey::Int(n) => write!(f, "{n}"),
            CardKey::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CardKey {
    fn from(value: i64) -> Self {
        CardKey::Int(value)
    }
}

impl From<i32> for CardKey {
    fn from(value: i32) -> Self {
        CardKey::Int(value.into())
    }
}

impl From<&str> for CardKey {
    fn from(value: &str) -> Self {
        CardKey::Str(value.to_string())
    }
}

impl From<String> for CardKey {
    fn from(value: String) -> Self {
        CardKey::Str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_integer_and_string_keys() {
        let keys: Vec<CardKey> = serde_json::from_str(r#"[3, "alpha", -1]"#).unwrap();
        assert_eq!(
            keys,
            vec![CardKey::Int(3), CardKey::from("alpha"), CardKey::Int(-1)]
        );
    }

    #[test]
    fn integer_and_string_keys_are_distinct() {
        assert_ne!(CardKey::from(1), CardKey::from("1"));
        assert_eq!(CardKey::from(1).to_string(), CardKey::from("1").to_string());
    }
}
