use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One of the six attribute categories shown on a player page.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
pub enum AttributeCategory {
    #[serde(rename = "Outside Scoring")]
    #[strum(serialize = "Outside Scoring")]
    OutsideScoring,
    #[serde(rename = "Inside Scoring")]
    #[strum(serialize = "Inside Scoring")]
    InsideScoring,
    Defense,
    Athleticism,
    Playmaking,
    Rebounding,
}

/// A category-level rating with its nested sub-attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeGroup {
    pub rating: u32,
    pub sub_attributes: SubAttributes,
}

/// A single sub-attribute score.
///
/// `value` is the base score with any `+1`/`-1` style modifier removed,
/// `raw_text` is the token exactly as it appeared on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubAttributeValue {
    pub value: u32,
    pub raw_text: String,
}

/// Sub-attributes keyed by name, in the order they appear on the page.
///
/// Serializes as a JSON object. Inserting an existing name replaces its
/// value but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubAttributes(Vec<(String, SubAttributeValue)>);

impl SubAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: SubAttributeValue) {
        let name = name.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&SubAttributeValue> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SubAttributeValue)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, SubAttributeValue)> for SubAttributes {
    fn from_iter<I: IntoIterator<Item = (S, SubAttributeValue)>>(iter: I) -> Self {
        let mut attrs = SubAttributes::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}

impl Serialize for SubAttributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(n, v)| (n, v)))
    }
}

impl<'de> Deserialize<'de> for SubAttributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = SubAttributes;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of sub-attribute names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut attrs = SubAttributes::new();
                while let Some((name, value)) = map.next_entry::<String, SubAttributeValue>()? {
                    attrs.insert(name, value);
                }
                Ok(attrs)
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(v: u32, raw: &str) -> SubAttributeValue {
        SubAttributeValue {
            value: v,
            raw_text: raw.to_string(),
        }
    }

    #[test]
    fn test_insert_keeps_first_position() {
        let mut attrs = SubAttributes::new();
        attrs.insert("Close Shot", value(99, "99"));
        attrs.insert("Driving Layup", value(90, "90"));
        attrs.insert("Close Shot", value(97, "97+1"));

        assert_eq!(attrs.len(), 2);
        assert_eq!(
            attrs.names().collect::<Vec<_>>(),
            ["Close Shot", "Driving Layup"]
        );
        assert_eq!(attrs.get("Close Shot"), Some(&value(97, "97+1")));
    }

    #[test]
    fn test_json_preserves_order() {
        let attrs: SubAttributes = [
            ("Three-Point Shot", value(99, "99")),
            ("Mid-Range Shot", value(98, "98+1")),
            ("Close Shot", value(94, "94")),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&attrs).unwrap();
        assert!(json.find("Three-Point").unwrap() < json.find("Mid-Range").unwrap());
        assert!(json.find("Mid-Range").unwrap() < json.find("Close Shot").unwrap());

        let back: SubAttributes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, attrs);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(AttributeCategory::OutsideScoring.to_string(), "Outside Scoring");
        assert_eq!(AttributeCategory::Rebounding.to_string(), "Rebounding");
        assert_eq!(
            serde_json::to_string(&AttributeCategory::InsideScoring).unwrap(),
            "\"Inside Scoring\""
        );
    }
}
