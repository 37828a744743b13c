// src/application/services/mod.rs
use std::sync::Arc;

use serde::Serialize;

use crate::{
    application::{
        error::ApplicationResult,
        ports::util::{SlugGenerator, SuffixGenerator},
    },
    config::SlugConfig,
    domain::{
        errors::DomainResult,
        slug::{FieldPath, SlugRequest, UniqueSlugService},
    },
    infrastructure::util::{DefaultSlugGenerator, RandomSuffixGenerator},
};

/// Wires the resolver to its ports and carries the configured defaults.
pub struct SlugServices {
    pub resolver: Arc<UniqueSlugService>,
    default_max_length: usize,
}

impl SlugServices {
    pub fn new(
        slugger: Arc<dyn SlugGenerator>,
        suffixes: Arc<dyn SuffixGenerator>,
        config: &SlugConfig,
    ) -> ApplicationResult<Self> {
        let resolver = Arc::new(UniqueSlugService::new(
            Arc::clone(&slugger),
            Arc::clone(&suffixes),
            config.policy()?,
        ));

        Ok(Self {
            resolver,
            default_max_length: config.max_length(),
        })
    }

    /// Production wiring: `slug` crate normalization and random suffixes.
    pub fn from_config(config: &SlugConfig) -> ApplicationResult<Self> {
        Self::new(
            Arc::new(DefaultSlugGenerator),
            Arc::new(RandomSuffixGenerator),
            config,
        )
    }

    pub fn from_env() -> ApplicationResult<Self> {
        let config = SlugConfig::from_env()?;
        Self::from_config(&config)
    }

    pub fn default_max_length(&self) -> usize {
        self.default_max_length
    }

    /// A request for `source` using the configured max length.
    pub fn request(&self, source: impl Into<String>) -> SlugRequest {
        SlugRequest::new(source, self.default_max_length)
    }

    /// A request whose source is read from `record` at `path`
    /// (e.g. `category__name`).
    pub fn request_from_record<T: Serialize>(
        &self,
        record: &T,
        path: &str,
    ) -> DomainResult<SlugRequest> {
        let source = FieldPath::parse(path)?.resolve_record(record)?;
        Ok(self.request(source))
    }
}
