use crate::domain::errors::DomainError;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.is_unique_violation() {
                let what = db_err
                    .constraint()
                    .map(|c| format!("unique constraint `{c}` violated"))
                    .unwrap_or_else(|| "slug already exists".into());
                return DomainError::Conflict(what);
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    // postgres unique_violation; sqlite SQLITE_CONSTRAINT_UNIQUE / _PRIMARYKEY
                    "23505" | "2067" | "1555" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_are_persistence_failures() {
        let err = map_sqlx(sqlx::Error::RowNotFound);
        assert!(matches!(err, DomainError::Persistence(_)));
    }
}
