//! Captured route parameters.

use std::collections::HashMap;

use serde::Serialize;

/// Parameters captured by a match, keyed by capture name
pub type Params = HashMap<String, ParamValue>;

/// Value bound to one capture
///
/// A single-segment capture (`:id`) binds one string. A trailing capture
/// (`:p*`) binds the ordered remainder of the path, which may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Single(String),
    Multi(Vec<String>),
}

impl ParamValue {
    /// Returns the value when it is exactly one segment
    pub fn as_single(&self) -> Option<&str> {
        match self {
            ParamValue::Single(value) => Some(value),
            ParamValue::Multi(values) if values.len() == 1 => Some(&values[0]),
            ParamValue::Multi(_) => None,
        }
    }

    /// Returns the captured segments in path order
    pub fn segments(&self) -> &[String] {
        match self {
            ParamValue::Single(value) => std::slice::from_ref(value),
            ParamValue::Multi(values) => values,
        }
    }

    /// Joins the captured segments back into a relative path (`movies/2023`)
    pub fn joined(&self) -> String {
        self.segments().join("/")
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Single(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::Multi(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        ParamValue::Multi(values.into_iter().map(str::to_string).collect())
    }
}
