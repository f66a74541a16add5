//! @acp:module "Pass-through Options"
//! @acp:summary "Typed option values forwarded to hasura as flags"
//! @acp:domain cli
//! @acp:layer model
//!
//! Options are kept in a sorted map so the flags of a built command always
//! come out in the same order.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use serde_json::Value;

use crate::error::{PickError, Result};

/// Option key naming the database whose seeds/migrations are searched
pub const NAMESPACE_KEY: &str = "database-name";

/// Value of a single pass-through flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Str(String),
    Bool(bool),
}

impl OptionValue {
    /// Convert an untyped JSON value, rejecting anything but strings and booleans
    pub fn from_json(key: &str, value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(OptionValue::Str(s.clone())),
            Value::Bool(b) => Ok(OptionValue::Bool(*b)),
            other => Err(PickError::InvalidOptionType {
                key: key.to_string(),
                found: json_type_name(other),
            }),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Str(s) => f.write_str(s),
            OptionValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

/// Pass-through flags for one invocation, including the namespace
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    values: BTreeMap<String, OptionValue>,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a set with the namespace already filled in
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        let mut set = Self::new();
        set.insert(NAMESPACE_KEY, namespace.into());
        set
    }

    /// Insert or replace an option, returning the previous value
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        self.values.insert(key.into(), value.into())
    }

    /// Insert only when no value is present yet
    pub fn insert_default(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.values.entry(key.into()).or_insert_with(|| value.into());
    }

    /// Merge untyped JSON flags (e.g. from the config file) without overriding
    pub fn merge_json<'a, I>(&mut self, flags: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a String, &'a Value)>,
    {
        for (key, value) in flags {
            let value = OptionValue::from_json(key, value)?;
            self.insert_default(key.clone(), value);
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    /// The namespace, if set to a non-empty string
    pub fn namespace(&self) -> Option<&str> {
        match self.values.get(NAMESPACE_KEY) {
            Some(OptionValue::Str(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate options in key order
    pub fn iter(&self) -> btree_map::Iter<'_, String, OptionValue> {
        self.values.iter()
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = (&'a String, &'a OptionValue);
    type IntoIter = btree_map::Iter<'a, String, OptionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
