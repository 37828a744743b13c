// src/domain/slug/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::{SlugGenerator, SuffixGenerator};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::entity::SlugRequest;
use crate::domain::slug::repository::{ExistencePredicate, SlugRepository};
use crate::domain::slug::snapshot::ExistingSlugs;
use crate::domain::slug::value_objects::Slug;

pub const DEFAULT_SUFFIX_LENGTH: usize = 4;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;
pub const DEFAULT_SUFFIX_CHARSET: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// How collisions are broken: suffix shape and retry bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugPolicy {
    suffix_length: usize,
    max_attempts: u32,
    charset: String,
}

impl SlugPolicy {
    pub fn new(
        suffix_length: usize,
        max_attempts: u32,
        charset: impl Into<String>,
    ) -> DomainResult<Self> {
        let charset = charset.into();
        if suffix_length == 0 {
            return Err(DomainError::Validation(
                "suffix length must be positive".into(),
            ));
        }
        if max_attempts == 0 {
            return Err(DomainError::Validation(
                "max attempts must be positive".into(),
            ));
        }
        if charset.is_empty()
            || !charset
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        {
            return Err(DomainError::Validation(
                "suffix charset must be non-empty and contain only [a-z0-9]".into(),
            ));
        }
        Ok(Self {
            suffix_length,
            max_attempts,
            charset,
        })
    }

    pub fn suffix_length(&self) -> usize {
        self.suffix_length
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn charset(&self) -> &str {
        &self.charset
    }

    /// Characters a suffixed slug spends on `-` plus the suffix.
    pub fn reserve(&self) -> usize {
        self.suffix_length + 1
    }
}

impl Default for SlugPolicy {
    fn default() -> Self {
        Self {
            suffix_length: DEFAULT_SUFFIX_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            charset: DEFAULT_SUFFIX_CHARSET.to_string(),
        }
    }
}

/// Domain service responsible for producing slugs that are unique in a scope.
pub struct UniqueSlugService {
    generator: Arc<dyn SlugGenerator>,
    suffixes: Arc<dyn SuffixGenerator>,
    policy: SlugPolicy,
}

impl UniqueSlugService {
    pub fn new(
        generator: Arc<dyn SlugGenerator>,
        suffixes: Arc<dyn SuffixGenerator>,
        policy: SlugPolicy,
    ) -> Self {
        Self {
            generator,
            suffixes,
            policy,
        }
    }

    pub fn policy(&self) -> &SlugPolicy {
        &self.policy
    }

    /// Slugifies `source` and cuts it to `max_length` characters.
    pub fn normalize(&self, source: &str, max_length: usize) -> DomainResult<Slug> {
        let slugged = self.generator.slugify(source);
        let base = truncate(&slugged, max_length);
        if base.is_empty() {
            return Err(DomainError::EmptySource);
        }
        Slug::new(base)
    }

    /// Returns the normalized base when `predicate` reports it free, else the
    /// first free `{base}-{suffix}` within the retry bound.
    pub fn resolve<P>(&self, request: &SlugRequest, predicate: &P) -> DomainResult<Slug>
    where
        P: ExistencePredicate + ?Sized,
    {
        self.check_request(request)?;
        let base = self.normalize(&request.source_value, request.max_length)?;
        self.resolve_from_base(base, request, predicate)
    }

    /// Keeps a slug the record already carries; only blank records get one.
    pub fn ensure<P>(
        &self,
        current: Option<Slug>,
        request: &SlugRequest,
        predicate: &P,
    ) -> DomainResult<Slug>
    where
        P: ExistencePredicate + ?Sized,
    {
        match current {
            Some(slug) => Ok(slug),
            None => self.resolve(request, predicate),
        }
    }

    /// Same contract as [`resolve`](Self::resolve), but takes every taken
    /// slug sharing the base's stem from `repo` in one query and resolves
    /// against that snapshot.
    pub async fn resolve_in_store(
        &self,
        request: &SlugRequest,
        repo: &dyn SlugRepository,
    ) -> DomainResult<Slug> {
        self.check_request(request)?;
        let base = self.normalize(&request.source_value, request.max_length)?;
        let stem = self.stem(&base, request.max_length)?;

        let taken = repo
            .slugs_with_prefix(&stem, &request.scope_filter, request.exclude_id)
            .await?;
        let snapshot = ExistingSlugs::new(taken);
        tracing::debug!(prefix = %stem, taken = snapshot.len(), "loaded existing slugs");

        self.resolve_from_base(base, request, &snapshot)
    }

    /// Keeps `current` while no other record in scope holds it.
    pub async fn ensure_in_store(
        &self,
        current: Option<Slug>,
        request: &SlugRequest,
        repo: &dyn SlugRepository,
    ) -> DomainResult<Slug> {
        if let Some(slug) = current {
            if !repo
                .exists(&slug, &request.scope_filter, request.exclude_id)
                .await?
            {
                return Ok(slug);
            }
            tracing::debug!(slug = %slug, "current slug is held by another record");
        }
        self.resolve_in_store(request, repo).await
    }

    fn check_request(&self, request: &SlugRequest) -> DomainResult<()> {
        if request.max_length <= self.policy.reserve() {
            return Err(DomainError::Validation(format!(
                "max length {} must exceed the suffix reserve of {}",
                request.max_length,
                self.policy.reserve()
            )));
        }
        request.scope_filter.validate()
    }

    /// Part of `base` that survives when a suffix is appended.
    fn stem(&self, base: &Slug, max_length: usize) -> DomainResult<Slug> {
        Slug::new(truncate(base.as_str(), max_length - self.policy.reserve()))
    }

    fn resolve_from_base<P>(
        &self,
        base: Slug,
        request: &SlugRequest,
        predicate: &P,
    ) -> DomainResult<Slug>
    where
        P: ExistencePredicate + ?Sized,
    {
        let scope = &request.scope_filter;
        if !predicate.exists(&base, scope)? {
            return Ok(base);
        }
        tracing::debug!(slug = %base, "base slug taken");

        let stem = self.stem(&base, request.max_length)?;
        let charset = self.policy.charset.as_bytes();
        for attempt in 1..=self.policy.max_attempts {
            let suffix = self.suffixes.suffix(self.policy.suffix_length, charset);
            let candidate = Slug::new(format!("{stem}-{suffix}"))?;
            if !predicate.exists(&candidate, scope)? {
                return Ok(candidate);
            }
            tracing::debug!(candidate = %candidate, attempt, "suffixed slug taken");
        }

        tracing::warn!(
            base = %base,
            attempts = self.policy.max_attempts,
            "slug scope saturated"
        );
        Err(DomainError::Exhausted {
            attempts: self.policy.max_attempts,
        })
    }
}

fn truncate(value: &str, max_length: usize) -> &str {
    let end = value
        .char_indices()
        .nth(max_length)
        .map(|(idx, _)| idx)
        .unwrap_or(value.len());
    value[..end].trim_matches('-')
}
