use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{RecordId, ScopeFilter, ScopeValue, Slug, SlugRepository};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone)]
struct StoredSlug {
    id: RecordId,
    slug: String,
    columns: BTreeMap<String, ScopeValue>,
}

/// Process-local slug store for callers without a database, and for tests.
///
/// Rows whose scope columns are identical form one uniqueness domain, the
/// same way a composite unique index would.
#[derive(Debug, Default)]
pub struct InMemorySlugRepository {
    rows: Mutex<Vec<StoredSlug>>,
}

impl InMemorySlugRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &self,
        id: RecordId,
        slug: Slug,
        columns: BTreeMap<String, ScopeValue>,
    ) -> DomainResult<()> {
        let mut rows = self.lock()?;
        if rows
            .iter()
            .any(|row| row.slug == slug.as_str() && row.columns == columns && row.id != id)
        {
            return Err(DomainError::Conflict(format!("slug `{slug}` already exists")));
        }
        rows.retain(|row| row.id != id);
        rows.push(StoredSlug {
            id,
            slug: slug.into_inner(),
            columns,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.lock().map(|rows| rows.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, Vec<StoredSlug>>> {
        self.rows
            .lock()
            .map_err(|_| DomainError::Persistence("slug store lock poisoned".into()))
    }

    fn matching<'a>(
        rows: &'a [StoredSlug],
        scope: &'a ScopeFilter,
        exclude: Option<RecordId>,
    ) -> impl Iterator<Item = &'a StoredSlug> + 'a {
        rows.iter()
            .filter(move |row| Some(row.id) != exclude && scope.matches(&row.columns))
    }
}

#[async_trait]
impl SlugRepository for InMemorySlugRepository {
    async fn slugs_with_prefix(
        &self,
        prefix: &Slug,
        scope: &ScopeFilter,
        exclude: Option<RecordId>,
    ) -> DomainResult<HashSet<String>> {
        let rows = self.lock()?;
        Ok(Self::matching(&rows, scope, exclude)
            .filter(|row| row.slug.starts_with(prefix.as_str()))
            .map(|row| row.slug.clone())
            .collect())
    }

    async fn exists(
        &self,
        slug: &Slug,
        scope: &ScopeFilter,
        exclude: Option<RecordId>,
    ) -> DomainResult<bool> {
        let rows = self.lock()?;
        Ok(Self::matching(&rows, scope, exclude).any(|row| row.slug == slug.as_str()))
    }
}
