pub mod entity;
pub mod field_path;
pub mod repository;
pub mod services;
pub mod snapshot;
pub mod value_objects;

pub use entity::SlugRequest;
pub use field_path::FieldPath;
pub use repository::{ExistencePredicate, SlugRepository};
pub use services::{SlugPolicy, UniqueSlugService};
pub use snapshot::ExistingSlugs;
pub use value_objects::{RecordId, ScopeFilter, ScopeValue, Slug};
