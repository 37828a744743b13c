use crate::domain::errors::{DomainError, DomainResult};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

const SEPARATOR: &str = "__";

/// A double-underscore path into a record graph, e.g. `category__name`
/// reads `record.category.name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    pub fn parse(path: &str) -> DomainResult<Self> {
        let segments: Vec<String> = path.split(SEPARATOR).map(str::to_string).collect();
        if segments.iter().any(|s| s.trim().is_empty()) {
            return Err(DomainError::Validation(format!(
                "field path `{path}` has an empty segment"
            )));
        }
        Ok(Self(segments))
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_nested(&self) -> bool {
        self.0.len() > 1
    }

    /// Walks `record` and renders the leaf as text.
    pub fn resolve(&self, record: &Value) -> DomainResult<String> {
        let leaf = self
            .0
            .iter()
            .try_fold(record, |value, segment| value.get(segment.as_str()))
            .ok_or_else(|| self.unresolved())?;

        match leaf {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => Err(self.unresolved()),
        }
    }

    pub fn resolve_record<T: Serialize>(&self, record: &T) -> DomainResult<String> {
        let value = serde_json::to_value(record)
            .map_err(|err| DomainError::Validation(format!("record is not serializable: {err}")))?;
        self.resolve(&value)
    }

    fn unresolved(&self) -> DomainError {
        DomainError::UnresolvedPath(self.to_string())
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(SEPARATOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Category {
        name: String,
    }

    #[derive(Serialize)]
    struct Product {
        title: String,
        category: Category,
    }

    #[test]
    fn resolves_flat_and_nested_paths() {
        let record = json!({
            "title": "Blue Mug",
            "stock": 12,
            "category": { "name": "Kitchen", "featured": true },
        });
        assert_eq!(FieldPath::parse("title").unwrap().resolve(&record).unwrap(), "Blue Mug");
        assert_eq!(FieldPath::parse("stock").unwrap().resolve(&record).unwrap(), "12");
        assert_eq!(
            FieldPath::parse("category__name").unwrap().resolve(&record).unwrap(),
            "Kitchen"
        );
        assert_eq!(
            FieldPath::parse("category__featured").unwrap().resolve(&record).unwrap(),
            "true"
        );
    }

    #[test]
    fn missing_or_non_scalar_leaves_are_unresolved() {
        let record = json!({ "category": { "name": null }, "tags": ["a"] });
        for path in ["category__slug", "category__name", "category", "tags", "title__x"] {
            let err = FieldPath::parse(path).unwrap().resolve(&record).unwrap_err();
            assert!(matches!(err, DomainError::UnresolvedPath(p) if p == path));
        }
    }

    #[test]
    fn empty_segments_are_rejected() {
        assert!(FieldPath::parse("").is_err());
        assert!(FieldPath::parse("category__").is_err());
        assert!(FieldPath::parse("__name").is_err());
    }

    #[test]
    fn resolves_serializable_records() {
        let product = Product {
            title: "Blue Mug".into(),
            category: Category { name: "Kitchen".into() },
        };
        let path = FieldPath::parse("category__name").unwrap();
        assert!(path.is_nested());
        assert_eq!(path.resolve_record(&product).unwrap(), "Kitchen");
    }
}
