// Variable values: lookup by name and coercion into expandable shapes

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use serde_json::{Map, Value};

use crate::error::InvalidValueTypeError;

/// Source of raw variable values for an expansion
pub trait VarLookup {
    fn lookup(&self, name: &str) -> Option<&Value>;
}

impl<K, S> VarLookup for HashMap<K, Value, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<K> VarLookup for BTreeMap<K, Value>
where
    K: Borrow<str> + Ord,
{
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl VarLookup for Map<String, Value> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// Only JSON objects define variables
impl VarLookup for Value {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(name))
    }
}

impl<T: VarLookup + ?Sized> VarLookup for &T {
    fn lookup(&self, name: &str) -> Option<&Value> {
        (**self).lookup(name)
    }
}

/// A variable value classified for expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VarValue<'a> {
    Absent,
    Text(&'a str),
    /// Nulls keep their position and expand to an empty string
    List(Vec<Option<&'a str>>),
    /// Pairs keep insertion order; a null value expands to an empty string
    Assoc(Vec<(&'a str, Option<&'a str>)>),
}

impl VarValue<'_> {
    /// Undefined for expansion purposes: absent, or an empty list or map
    pub fn is_undefined(&self) -> bool {
        match self {
            VarValue::Absent => true,
            VarValue::Text(_) => false,
            VarValue::List(items) => items.is_empty(),
            VarValue::Assoc(pairs) => pairs.is_empty(),
        }
    }
}

/// Classify the raw value of variable `name`
///
/// Numbers, booleans and nested containers are rejected rather than
/// stringified.
pub fn coerce<'a>(
    name: &str,
    raw: Option<&'a Value>,
) -> Result<VarValue<'a>, InvalidValueTypeError> {
    let invalid = |type_description: String| InvalidValueTypeError {
        name: name.to_string(),
        type_description,
    };

    match raw {
        None | Some(Value::Null) => Ok(VarValue::Absent),
        Some(Value::String(s)) => Ok(VarValue::Text(s.as_str())),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(Some(s.as_str())),
                Value::Null => Ok(None),
                other => Err(invalid(format!("array containing {}", type_name(other)))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(VarValue::List),
        Some(Value::Object(map)) => map
            .iter()
            .map(|(key, value)| match value {
                Value::String(s) => Ok((key.as_str(), Some(s.as_str()))),
                Value::Null => Ok((key.as_str(), None)),
                other => Err(invalid(format!("object with {} value", type_name(other)))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(VarValue::Assoc),
        Some(other) => Err(invalid(type_name(other).to_string())),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
