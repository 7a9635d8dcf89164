use serde::{ser::Error as _, Deserialize, Deserializer, Serialize, Serializer};

use crate::result::Result;

/// `Ok(v)` serializes as `v`. Serializing an `Err` fails with the error's
/// message.
impl<T: Serialize> Serialize for Result<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Result::Ok(v) => v.serialize(serializer),
            Result::Err(e) => Err(S::Error::custom(e.message())),
        }
    }
}

/// Any successfully deserialized `T` becomes `Ok(T)`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Result<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Result::Ok)
    }
}
