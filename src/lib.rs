//! Scope-aware unique slug resolution.
//!
//! [`UniqueSlugService`] turns a source value into a URL-safe slug and asks
//! an [`ExistencePredicate`] whether it is taken. Collisions are broken by a
//! short random suffix, retried a bounded number of times.
//!
//! ```
//! use std::sync::Arc;
//! use unique_slug::{ScopeFilter, SlugPolicy, SlugRequest, UniqueSlugService};
//! use unique_slug::infrastructure::util::{DefaultSlugGenerator, RandomSuffixGenerator};
//!
//! let resolver = UniqueSlugService::new(
//!     Arc::new(DefaultSlugGenerator),
//!     Arc::new(RandomSuffixGenerator),
//!     SlugPolicy::default(),
//! );
//! let taken = |slug: &str, _: &ScopeFilter| slug == "hello-world";
//! let slug = resolver.resolve(&SlugRequest::new("Hello World!", 50), &taken).unwrap();
//! assert!(slug.as_str().starts_with("hello-world-"));
//! assert_eq!(slug.len(), "hello-world-".len() + 4);
//! ```
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::services::SlugServices;
pub use config::SlugConfig;
pub use domain::errors::{DomainError, DomainResult};
pub use domain::slug::{
    ExistencePredicate, ExistingSlugs, FieldPath, RecordId, ScopeFilter, ScopeValue, Slug,
    SlugPolicy, SlugRepository, SlugRequest, UniqueSlugService,
};
