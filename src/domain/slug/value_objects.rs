use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("record id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<RecordId> for i64 {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

/// A URL-safe slug: lowercase ASCII letters, digits and single inner hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        {
            return Err(DomainError::Validation(format!(
                "slug `{value}` contains characters outside [a-z0-9-]"
            )));
        }
        if value.starts_with('-') || value.ends_with('-') {
            return Err(DomainError::Validation(format!(
                "slug `{value}` cannot start or end with a hyphen"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Checks that `name` can be spliced into SQL as a bare identifier.
pub fn validate_identifier(name: &str) -> DomainResult<()> {
    let mut bytes = name.bytes();
    let valid_head = bytes
        .next()
        .map(|b| b.is_ascii_alphabetic() || b == b'_')
        .unwrap_or(false);
    if valid_head && bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        Ok(())
    } else {
        Err(DomainError::Validation(format!(
            "`{name}` is not a valid column identifier"
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScopeValue {
    Bool(bool),
    Integer(i64),
    Text(String),
}

impl fmt::Display for ScopeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeValue::Bool(v) => write!(f, "{v}"),
            ScopeValue::Integer(v) => write!(f, "{v}"),
            ScopeValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<&str> for ScopeValue {
    fn from(value: &str) -> Self {
        ScopeValue::Text(value.to_string())
    }
}

impl From<String> for ScopeValue {
    fn from(value: String) -> Self {
        ScopeValue::Text(value)
    }
}

impl From<i64> for ScopeValue {
    fn from(value: i64) -> Self {
        ScopeValue::Integer(value)
    }
}

impl From<bool> for ScopeValue {
    fn from(value: bool) -> Self {
        ScopeValue::Bool(value)
    }
}

/// Column/value pairs restricting which records take part in the uniqueness
/// check. An empty filter means the whole table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeFilter(BTreeMap<String, ScopeValue>);

impl ScopeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(
        mut self,
        column: impl Into<String>,
        value: impl Into<ScopeValue>,
    ) -> DomainResult<Self> {
        let column = column.into();
        validate_identifier(&column)?;
        self.0.insert(column, value.into());
        Ok(self)
    }

    pub fn get(&self, column: &str) -> Option<&ScopeValue> {
        self.0.get(column)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScopeValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when every pair in `self` is also present in `columns`.
    pub fn matches(&self, columns: &BTreeMap<String, ScopeValue>) -> bool {
        self.0
            .iter()
            .all(|(column, value)| columns.get(column) == Some(value))
    }

    pub(crate) fn validate(&self) -> DomainResult<()> {
        self.0.keys().try_for_each(|column| validate_identifier(column))
    }
}
