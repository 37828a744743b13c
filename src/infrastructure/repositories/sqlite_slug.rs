use super::{SlugTable, map_sqlx};
use crate::domain::errors::DomainResult;
use crate::domain::slug::{RecordId, ScopeFilter, ScopeValue, Slug, SlugRepository};
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteSlugRepository {
    pool: Arc<SqlitePool>,
    table: SlugTable,
}

impl SqliteSlugRepository {
    pub fn new(pool: Arc<SqlitePool>, table: SlugTable) -> Self {
        Self { pool, table }
    }

    fn apply_conditions(
        &self,
        builder: &mut QueryBuilder<'_, Sqlite>,
        scope: &ScopeFilter,
        exclude: Option<RecordId>,
    ) {
        for (column, value) in scope.iter() {
            builder.push(" AND ").push(column).push(" = ");
            match value {
                ScopeValue::Text(v) => builder.push_bind(v.clone()),
                ScopeValue::Integer(v) => builder.push_bind(*v),
                ScopeValue::Bool(v) => builder.push_bind(*v),
            };
        }

        if let Some(id) = exclude {
            builder
                .push(" AND ")
                .push(self.table.id_column())
                .push(" <> ")
                .push_bind(i64::from(id));
        }
    }
}

#[async_trait]
impl SlugRepository for SqliteSlugRepository {
    async fn slugs_with_prefix(
        &self,
        prefix: &Slug,
        scope: &ScopeFilter,
        exclude: Option<RecordId>,
    ) -> DomainResult<HashSet<String>> {
        scope.validate()?;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(self.table.select_prefix_sql());
        builder.push_bind(format!("{}%", prefix.as_str()));
        self.apply_conditions(&mut builder, scope, exclude);

        let rows = builder
            .build_query_scalar::<String>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(rows.into_iter().collect())
    }

    async fn exists(
        &self,
        slug: &Slug,
        scope: &ScopeFilter,
        exclude: Option<RecordId>,
    ) -> DomainResult<bool> {
        scope.validate()?;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(self.table.count_slug_sql());
        builder.push_bind(slug.as_str().to_string());
        self.apply_conditions(&mut builder, scope, exclude);

        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(count > 0)
    }
}
