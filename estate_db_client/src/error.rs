//! Database errors for estatedb operations.

use thiserror::Error;

/// Errors produced by estatedb queries.
#[derive(Debug, Error)]
pub enum EstateDatabaseError {
    /// The row collided with a uniqueness constraint. For bookings this
    /// means the slot is already held.
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(#[source] sqlx::Error),

    #[error("Error communicating with estatedb: {0}")]
    Query(#[from] sqlx::Error),
}

impl EstateDatabaseError {
    /// Classify a raw sqlx error, pulling unique violations out into
    /// their own variant. Write paths that care about collisions must go
    /// through this instead of the blanket `From`.
    pub(crate) fn from_sqlx(err: sqlx::Error) -> Self {
        let is_unique = matches!(
            &err,
            sqlx::Error::Database(db_err) if db_err.is_unique_violation()
        );
        if is_unique {
            EstateDatabaseError::UniqueViolation(err)
        } else {
            EstateDatabaseError::Query(err)
        }
    }

    pub fn is_unique_violation(&self) -> bool {
        matches!(self, EstateDatabaseError::UniqueViolation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_constraint_errors_classify_as_query() {
        let err = EstateDatabaseError::from_sqlx(sqlx::Error::RowNotFound);
        assert!(!err.is_unique_violation());
    }
}
