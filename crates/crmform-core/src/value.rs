//! Field values and the values record

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Current value of one field
///
/// Serialized untagged so a record reads as a plain JSON object:
/// `{"name": "Acme", "employees": 12, "vip": true, "notes": null}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Null,
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// A value counts as filled when it is not null and not an empty string
    pub fn is_filled(&self) -> bool {
        match self {
            FieldValue::Null => false,
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Bool(_) | FieldValue::Number(_) => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Null => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// Mapping from field name to current value
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, FieldValue>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// Set or overwrite a value, returning the previous one
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) -> Option<FieldValue> {
        self.0.insert(name.into(), value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Overlay `other` onto self; keys missing from `other` keep their value
    pub fn merge(&mut self, other: &FormValues) {
        for (name, value) in other.iter() {
            self.0.insert(name.clone(), value.clone());
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, FieldValue> {
        self.0.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Keep only the entries whose name passes `keep`
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.0.retain(|name, _| keep(name));
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a FormValues {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = btree_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_filled() {
        assert!(!FieldValue::Null.is_filled());
        assert!(!FieldValue::text("").is_filled());
        assert!(FieldValue::text(" ").is_filled());
        assert!(FieldValue::Number(0.0).is_filled());
        assert!(FieldValue::Bool(false).is_filled());
    }

    #[test]
    fn test_merge_overlays_and_preserves() {
        let mut values: FormValues = [("a", 1i64)].into_iter().collect();
        let incoming: FormValues = [("b", 2i64)].into_iter().collect();
        values.merge(&incoming);

        assert_eq!(values.get("a"), Some(&FieldValue::Number(1.0)));
        assert_eq!(values.get("b"), Some(&FieldValue::Number(2.0)));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_merge_overwrites_existing_key() {
        let mut values: FormValues = [("stage", "lead")].into_iter().collect();
        let incoming: FormValues = [("stage", "won")].into_iter().collect();
        values.merge(&incoming);
        assert_eq!(values.get("stage"), Some(&FieldValue::text("won")));
    }

    #[test]
    fn test_json_shape_is_plain_object() {
        let mut values = FormValues::new();
        values.insert("name", FieldValue::text("Acme"));
        values.insert("employees", FieldValue::Number(12.0));
        values.insert("vip", FieldValue::Bool(true));
        values.insert("notes", FieldValue::Null);

        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Acme",
                "employees": 12.0,
                "vip": true,
                "notes": null,
            })
        );
    }

    #[test]
    fn test_json_parses_each_variant() {
        let values: FormValues =
            serde_json::from_str(r#"{"a": "x", "b": 3, "c": false, "d": null}"#).unwrap();
        assert_eq!(values.get("a"), Some(&FieldValue::text("x")));
        assert_eq!(values.get("b"), Some(&FieldValue::Number(3.0)));
        assert_eq!(values.get("c"), Some(&FieldValue::Bool(false)));
        assert_eq!(values.get("d"), Some(&FieldValue::Null));
    }

    #[test]
    fn test_display_trims_integral_numbers() {
        assert_eq!(FieldValue::Number(42.0).to_string(), "42");
        assert_eq!(FieldValue::Number(2.5).to_string(), "2.5");
        assert_eq!(FieldValue::Null.to_string(), "");
        assert_eq!(FieldValue::Bool(true).to_string(), "true");
    }

    #[test]
    fn test_retain_drops_unlisted_names() {
        let mut values: FormValues = [("keep", "1"), ("drop", "2")].into_iter().collect();
        values.retain(|name| name == "keep");
        assert_eq!(values.names().collect::<Vec<_>>(), vec!["keep"]);
    }
}
