use crate::domain::slug::value_objects::{RecordId, ScopeFilter};

/// Input to a single slug resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugRequest {
    pub source_value: String,
    pub max_length: usize,
    pub scope_filter: ScopeFilter,
    pub exclude_id: Option<RecordId>,
}

impl SlugRequest {
    pub fn new(source_value: impl Into<String>, max_length: usize) -> Self {
        Self {
            source_value: source_value.into(),
            max_length,
            scope_filter: ScopeFilter::default(),
            exclude_id: None,
        }
    }

    pub fn with_scope(mut self, scope_filter: ScopeFilter) -> Self {
        self.scope_filter = scope_filter;
        self
    }

    /// Ignore the record with this id when checking for collisions, so
    /// re-slugging a saved record does not collide with itself.
    pub fn excluding(mut self, id: RecordId) -> Self {
        self.exclude_id = Some(id);
        self
    }
}
