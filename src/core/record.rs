use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One scalar cell of a raw record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawScalar {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl fmt::Display for RawScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value:?}"),
        }
    }
}

impl From<&str> for RawScalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawScalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for RawScalar {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for RawScalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// One observation: field name to scalar value.
///
/// `IndexMap` keeps field order stable so records serialize back the way they
/// were supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    fields: IndexMap<String, RawScalar>,
}

impl RawRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record holding a single field.
    #[must_use]
    pub fn single(field: impl Into<String>, value: impl Into<RawScalar>) -> Self {
        Self::new().with_field(field, value)
    }

    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<RawScalar>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&RawScalar> {
        self.fields.get(field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &RawScalar)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<RawScalar>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Parses a JSON array of flat objects, e.g. `[{"value":"5"},{"value":"1"}]`.
pub fn records_from_json_str(input: &str) -> ChartResult<Vec<RawRecord>> {
    serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse records json: {e}")))
}

/// Wraps each value as a record with one field named `field`.
#[must_use]
pub fn records_from_values<I, V>(field: &str, values: I) -> Vec<RawRecord>
where
    I: IntoIterator<Item = V>,
    V: Into<RawScalar>,
{
    values
        .into_iter()
        .map(|value| RawRecord::single(field, value))
        .collect()
}
