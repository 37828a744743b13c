// src/infrastructure/repositories/mod.rs
mod error;
mod in_memory;
mod postgres_slug;
mod sqlite_slug;
mod table;

pub use error::map_sqlx;
pub use in_memory::InMemorySlugRepository;
pub use postgres_slug::PostgresSlugRepository;
pub use sqlite_slug::SqliteSlugRepository;
pub use table::SlugTable;
