use crate::domain::errors::DomainResult;
use crate::domain::slug::value_objects::{RecordId, ScopeFilter, Slug};
use async_trait::async_trait;
use std::collections::HashSet;

/// Answers "does a record with this slug already exist in this scope?".
pub trait ExistencePredicate {
    fn exists(&self, candidate: &Slug, scope: &ScopeFilter) -> DomainResult<bool>;
}

impl<F> ExistencePredicate for F
where
    F: Fn(&str, &ScopeFilter) -> bool,
{
    fn exists(&self, candidate: &Slug, scope: &ScopeFilter) -> DomainResult<bool> {
        Ok(self(candidate.as_str(), scope))
    }
}

#[async_trait]
pub trait SlugRepository: Send + Sync {
    /// Every stored slug in `scope` that starts with `prefix`, skipping the
    /// row identified by `exclude`.
    async fn slugs_with_prefix(
        &self,
        prefix: &Slug,
        scope: &ScopeFilter,
        exclude: Option<RecordId>,
    ) -> DomainResult<HashSet<String>>;

    async fn exists(
        &self,
        slug: &Slug,
        scope: &ScopeFilter,
        exclude: Option<RecordId>,
    ) -> DomainResult<bool>;
}
