//! Ordered parameter storage shared by gateways and requests.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered key/value store holding gateway or request configuration
/// (credentials, currency, mode flags).
///
/// Keys are plain strings; values are JSON values so adapters can store
/// scalars, lists, or nested structures without a schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterBag {
    entries: Map<String, Value>,
}

impl ParameterBag {
    pub fn new() -> Self {
        Self { entries: Map::new() }
    }

    /// Builds a bag from declared defaults overlaid with caller overrides.
    ///
    /// A sequence-valued default declares candidate values and collapses to
    /// its first element; the resolution happens once, here, and the stored
    /// value is an ordinary scalar afterwards. An empty sequence stores
    /// nothing. Override entries are applied verbatim, including keys absent
    /// from the defaults.
    pub fn from_defaults(defaults: &ParameterBag, overrides: ParameterBag) -> Self {
        let mut entries = Map::new();
        for (key, value) in &defaults.entries {
            match value {
                Value::Array(candidates) => {
                    if let Some(first) = candidates.first() {
                        entries.insert(key.clone(), first.clone());
                    }
                }
                other => {
                    entries.insert(key.clone(), other.clone());
                }
            }
        }
        for (key, value) in overrides.entries {
            entries.insert(key, value);
        }
        Self { entries }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.entries.get(key).and_then(Value::as_bool)
    }

    /// Reads a decimal parameter stored as either a string or a number.
    pub fn get_decimal(&self, key: &str) -> Option<Decimal> {
        match self.entries.get(key)? {
            Value::String(raw) => Decimal::from_str(raw.trim()).ok(),
            Value::Number(n) => n.as_f64().and_then(|f| Decimal::try_from(f).ok()),
            _ => None,
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}

impl From<Map<String, Value>> for ParameterBag {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, Value)> for ParameterBag {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}
