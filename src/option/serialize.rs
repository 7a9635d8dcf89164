use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::option::Option;

/// `Some(v)` serializes as `v`, `None` as the format's null.
impl<T: Serialize> Serialize for Option<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Option::Some(v) => serializer.serialize_some(v),
            Option::None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Option<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        std::option::Option::<T>::deserialize(deserializer).map(Option::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pair;

    #[test]
    fn test_json_shape() {
        assert_eq!(serde_json::to_string(&Option::Some(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&Option::<i32>::None).unwrap(), "null");
    }

    #[test]
    fn test_json_parse() {
        let some: Option<Vec<u8>> = serde_json::from_str("[1,2]").unwrap();
        assert_eq!(some, Option::Some(vec![1, 2]));
        let none: Option<Vec<u8>> = serde_json::from_str("null").unwrap();
        assert_eq!(none, Option::None);
    }

    #[test]
    fn test_nested_in_struct() {
        let p = Pair::new(Option::Some("x".to_string()), Option::<u8>::None);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"a":"x","b":null}"#);
        let back: Pair<Option<String>, Option<u8>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
