// tests/support/helpers.rs
use std::sync::Arc;

use once_cell::sync::Lazy;
use sqlx::SqlitePool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use unique_slug::infrastructure::{database, util::DefaultSlugGenerator};
use unique_slug::{SlugPolicy, UniqueSlugService};

use super::mocks::ScriptedSuffix;

static TRACING: Lazy<()> = Lazy::new(|| {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn,unique_slug=debug".to_string());
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
});

pub fn init_tracing() {
    Lazy::force(&TRACING);
}

pub fn scripted_service(suffixes: &[&str]) -> UniqueSlugService {
    init_tracing();
    UniqueSlugService::new(
        Arc::new(DefaultSlugGenerator),
        Arc::new(ScriptedSuffix::new(suffixes)),
        SlugPolicy::default(),
    )
}

/// Single-connection in-memory database with a tenant-scoped `posts` table.
pub async fn posts_pool() -> Arc<SqlitePool> {
    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("open sqlite");

    sqlx::query(
        "CREATE TABLE posts (
            id INTEGER PRIMARY KEY,
            tenant_id INTEGER NOT NULL,
            published INTEGER NOT NULL DEFAULT 0,
            slug TEXT NOT NULL,
            UNIQUE (tenant_id, slug)
        )",
    )
    .execute(&pool)
    .await
    .expect("create posts");

    Arc::new(pool)
}

pub async fn insert_post(pool: &SqlitePool, id: i64, tenant_id: i64, slug: &str) {
    sqlx::query("INSERT INTO posts (id, tenant_id, slug) VALUES (?, ?, ?)")
        .bind(id)
        .bind(tenant_id)
        .bind(slug)
        .execute(pool)
        .await
        .expect("insert post");
}
