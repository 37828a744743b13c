use crate::domain::errors::DomainResult;
use crate::domain::slug::value_objects::validate_identifier;

/// Where slugs live: the table plus its slug and primary key columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugTable {
    table: String,
    slug_column: String,
    id_column: String,
}

impl SlugTable {
    pub fn new(
        table: impl Into<String>,
        slug_column: impl Into<String>,
        id_column: impl Into<String>,
    ) -> DomainResult<Self> {
        let table = table.into();
        let slug_column = slug_column.into();
        let id_column = id_column.into();
        validate_identifier(&table)?;
        validate_identifier(&slug_column)?;
        validate_identifier(&id_column)?;
        Ok(Self {
            table,
            slug_column,
            id_column,
        })
    }

    /// `slug` and `id` columns on `table`.
    pub fn with_defaults(table: impl Into<String>) -> DomainResult<Self> {
        Self::new(table, "slug", "id")
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn slug_column(&self) -> &str {
        &self.slug_column
    }

    pub fn id_column(&self) -> &str {
        &self.id_column
    }

    pub(super) fn select_prefix_sql(&self) -> String {
        format!(
            "SELECT {slug} FROM {table} WHERE {slug} LIKE ",
            slug = self.slug_column,
            table = self.table
        )
    }

    pub(super) fn count_slug_sql(&self) -> String {
        format!(
            "SELECT COUNT(1) FROM {table} WHERE {slug} = ",
            slug = self.slug_column,
            table = self.table
        )
    }
}
