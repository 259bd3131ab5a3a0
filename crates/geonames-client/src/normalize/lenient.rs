//! Field deserializers tolerant of the service's loose typing
//!
//! GeoNames sends coordinates as strings in some endpoints and as numbers in
//! others, and ids either way. Falsy values (`null`, `false`, `""`, `0`) decode
//! to `None` so they never reach a caller-visible record. Objects and arrays in
//! a scalar position are skipped the same way.

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserializer;

/// Non-empty string, or a number rendered as text
pub(crate) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or number")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok((!v.is_empty()).then(|| v.to_string()))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v.to_string()))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v.to_string()))
        }

        fn visit_bool<E>(self, _v: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            skip_map(map)
        }

        fn visit_seq<A>(self, seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            skip_seq(seq)
        }
    }

    deserializer.deserialize_any(TextVisitor)
}

/// Finite, non-zero number from a JSON number or numeric string
pub(crate) fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct NumberVisitor;

    impl<'de> Visitor<'de> for NumberVisitor {
        type Value = Option<f64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number or numeric string")
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok((v.is_finite() && v != 0.0).then_some(v))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            self.visit_f64(v as f64)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            self.visit_f64(v as f64)
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            match v.trim().parse::<f64>() {
                Ok(parsed) => self.visit_f64(parsed),
                Err(_) => Ok(None),
            }
        }

        fn visit_bool<E>(self, _v: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            skip_map(map)
        }

        fn visit_seq<A>(self, seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            skip_seq(seq)
        }
    }

    deserializer.deserialize_any(NumberVisitor)
}

/// Positive integer id from a JSON number or numeric string
pub(crate) fn identifier<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = Option<u64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer id or numeric string")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok((v != 0).then_some(v))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(u64::try_from(v).ok().filter(|id| *id != 0))
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if v.fract() == 0.0 && v > 0.0 && v <= u64::MAX as f64 {
                Ok(Some(v as u64))
            } else {
                Ok(None)
            }
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.trim().parse::<u64>().ok().filter(|id| *id != 0))
        }

        fn visit_bool<E>(self, _v: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            skip_map(map)
        }

        fn visit_seq<A>(self, seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            skip_seq(seq)
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

fn skip_map<'de, A, T>(mut map: A) -> Result<Option<T>, A::Error>
where
    A: MapAccess<'de>,
{
    while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
    Ok(None)
}

fn skip_seq<'de, A, T>(mut seq: A) -> Result<Option<T>, A::Error>
where
    A: SeqAccess<'de>,
{
    while seq.next_element::<IgnoredAny>()?.is_some() {}
    Ok(None)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::text")]
        text: Option<String>,
        #[serde(default, deserialize_with = "super::number")]
        number: Option<f64>,
        #[serde(default, deserialize_with = "super::identifier")]
        id: Option<u64>,
    }

    fn probe(value: serde_json::Value) -> Probe {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_missing_fields_are_none() {
        let p = probe(json!({}));
        assert!(p.text.is_none() && p.number.is_none() && p.id.is_none());
    }

    #[test]
    fn test_falsy_values_are_none() {
        let p = probe(json!({"text": "", "number": 0, "id": 0}));
        assert!(p.text.is_none() && p.number.is_none() && p.id.is_none());

        let p = probe(json!({"text": null, "number": "0.0", "id": false}));
        assert!(p.text.is_none() && p.number.is_none() && p.id.is_none());
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let p = probe(json!({"text": 2803138, "number": "51.21989", "id": "2803138"}));
        assert_eq!(p.text.as_deref(), Some("2803138"));
        assert_eq!(p.number, Some(51.21989));
        assert_eq!(p.id, Some(2803138));
    }

    #[test]
    fn test_garbage_number_is_none() {
        let p = probe(json!({"number": "north", "id": "abc"}));
        assert!(p.number.is_none());
        assert!(p.id.is_none());
    }

    #[test]
    fn test_objects_and_arrays_are_none() {
        let p = probe(json!({"text": {"en": "Flanders"}, "number": [51.2], "id": {"value": 1}}));
        assert!(p.text.is_none() && p.number.is_none() && p.id.is_none());

        let p = probe(json!({"text": [], "number": {}, "id": [1, 2]}));
        assert!(p.text.is_none() && p.number.is_none() && p.id.is_none());
    }
}
