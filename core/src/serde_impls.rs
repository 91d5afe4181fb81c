//! Serializes [`Optional`] in nullable form: `None` as the serializer's none (`null` in JSON), `Some(value)` as
//! `value`.
//!
//! Like `Option<Option<T>>`, a present optional holding an absent payload serializes as none, and therefore comes back
//! as [`Optional::None`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::optional::Optional;

impl<T: Serialize> Serialize for Optional<T> {
  #[inline]
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Optional::Some(value) => serializer.serialize_some(value),
      Optional::None => serializer.serialize_none(),
    }
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
  #[inline]
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Option::<T>::deserialize(deserializer).map(Optional::from)
  }
}


#[cfg(test)]
mod tests {
  use serde::{Deserialize, Serialize};

  use crate::optional::Optional;

  #[derive(Serialize, Deserialize, PartialEq, Debug)]
  struct Settings {
    name: Optional<String>,
    #[serde(default)]
    retries: Optional<u32>,
  }

  #[test]
  fn test_serialize() {
    let settings = Settings { name: Optional::Some("a".to_string()), retries: Optional::None };
    assert_eq!(serde_json::to_string(&settings).unwrap(), r#"{"name":"a","retries":null}"#);
  }

  #[test]
  fn test_deserialize() {
    let settings: Settings = serde_json::from_str(r#"{"name":null}"#).unwrap();
    assert_eq!(settings, Settings { name: Optional::None, retries: Optional::None });
    let settings: Settings = serde_json::from_str(r#"{"name":"b","retries":3}"#).unwrap();
    assert_eq!(settings, Settings { name: Optional::Some("b".to_string()), retries: Optional::Some(3) });
  }

  #[test]
  fn test_some_holding_absent_payload_serializes_as_null() {
    let optional = Optional::Some(None::<u32>);
    let json = serde_json::to_string(&optional).unwrap();
    assert_eq!(json, "null");
    assert_eq!(serde_json::from_str::<Optional<Option<u32>>>(&json).unwrap(), Optional::None);
  }
}
