use crate::domain::errors::DomainResult;
use crate::domain::slug::repository::ExistencePredicate;
use crate::domain::slug::value_objects::{ScopeFilter, Slug};
use std::collections::HashSet;

/// Slugs already taken, fetched up front with one prefix query.
///
/// The scope was applied when the set was loaded, so `exists` only looks at
/// the candidate.
#[derive(Debug, Clone, Default)]
pub struct ExistingSlugs(HashSet<String>);

impl ExistingSlugs {
    pub fn new(slugs: HashSet<String>) -> Self {
        Self(slugs)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for ExistingSlugs {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl ExistencePredicate for ExistingSlugs {
    fn exists(&self, candidate: &Slug, _scope: &ScopeFilter) -> DomainResult<bool> {
        Ok(self.0.contains(candidate.as_str()))
    }
}
