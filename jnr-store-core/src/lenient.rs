//! Forgiving deserializers for hand-edited catalog files.
//!
//! `games.json` is maintained by hand, so counters show up as strings,
//! flags as `"true"`, and optional fields as `null`. These helpers map all
//! of that onto the typed model instead of rejecting the record.

use serde::de::{Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serializer};
use std::fmt;

/// Any JSON/YAML scalar, with a catch-all for arrays, objects, and null.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

impl Scalar {
    fn into_text(self) -> Option<String> {
        match self {
            Self::Text(s) if s.trim().is_empty() => None,
            Self::Text(s) => Some(s),
            Self::Unsigned(n) => Some(n.to_string()),
            Self::Signed(n) => Some(n.to_string()),
            Self::Float(f) if f.is_finite() => Some(f.to_string()),
            _ => None,
        }
    }

    fn into_count(self) -> u64 {
        match self {
            Self::Unsigned(n) => n,
            Self::Signed(_) => 0,
            Self::Float(f) if f.is_finite() && f > 0.0 => f as u64,
            Self::Text(s) => {
                let s = s.trim();
                s.parse::<u64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().filter(|f| *f > 0.0).map(|f| f as u64))
                    .unwrap_or(0)
            }
            _ => 0,
        }
    }

    fn into_flag(self) -> bool {
        match self {
            Self::Bool(b) => b,
            Self::Unsigned(n) => n != 0,
            Self::Signed(n) => n != 0,
            Self::Text(s) => matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "1"),
            _ => false,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListOrScalar {
    List(Vec<Scalar>),
    One(Scalar),
}

/// Non-negative counter. Missing, negative, or garbage values become 0.
pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(Scalar::deserialize(deserializer)?.into_count())
}

/// Optional text. Blank strings count as absent; numbers are stringified.
pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Scalar::deserialize(deserializer)?.into_text())
}

/// Record identifier. Numbers are accepted; anything else becomes an empty id,
/// which the loader rejects.
pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(text(deserializer)?.map(|s| s.trim().to_string()).unwrap_or_default())
}

/// Truthy flag (`true`, `"true"`, `1`).
pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Scalar::deserialize(deserializer)?.into_flag())
}

/// List of strings. A bare string becomes a one-element list; non-text
/// entries are dropped.
pub fn string_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let items = match ListOrScalar::deserialize(deserializer)? {
        ListOrScalar::List(items) => items,
        ListOrScalar::One(item) => vec![item],
    };
    Ok(items.into_iter().filter_map(Scalar::into_text).collect())
}

/// A value of the expected shape, or anything else.
#[derive(Deserialize)]
#[serde(untagged)]
enum Shaped<T> {
    Value(T),
    Other(IgnoredAny),
}

impl<T> Shaped<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Other(_) => None,
        }
    }
}

/// Nested object. `null` or a value of the wrong shape becomes `None`.
pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Shaped::<T>::deserialize(deserializer)?.into_option())
}

/// Nested object that falls back to `T::default()` when `null` or malformed.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(object(deserializer)?.unwrap_or_default())
}

/// List of nested objects. Entries of the wrong shape are dropped; a
/// non-list value is an empty list.
pub fn object_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Shaped::<Vec<Shaped<T>>>::deserialize(deserializer)?
        .into_option()
        .unwrap_or_default();
    Ok(items.into_iter().filter_map(Shaped::into_option).collect())
}

/// Object of text values, kept in document order. Null entries are skipped,
/// and anything that is not an object reads as empty.
pub fn ordered_text_map<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<(String, String)>, D::Error> {
    struct OrderedVisitor;

    impl<'de> Visitor<'de> for OrderedVisitor {
        type Value = Vec<(String, String)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of requirement names to values")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_none<E>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
            d.deserialize_any(self)
        }

        fn visit_bool<E: serde::de::Error>(self, _: bool) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_i64<E: serde::de::Error>(self, _: i64) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_u64<E: serde::de::Error>(self, _: u64) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_f64<E: serde::de::Error>(self, _: f64) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_str<E: serde::de::Error>(self, _: &str) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(Vec::new())
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::new();
            while let Some((key, value)) = map.next_entry::<String, Scalar>()? {
                if let Some(value) = value.into_text() {
                    entries.push((key, value));
                }
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_any(OrderedVisitor)
}

/// Write (field, value) pairs back out as an object.
pub fn pairs_as_map<S: Serializer>(pairs: &[(String, String)], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(pairs.iter().map(|(k, v)| (k, v)))
}
