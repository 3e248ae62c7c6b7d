use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// True when the underlying failure is an integrity-constraint violation
    /// (SQLSTATE class 23), e.g. inserting NULL into the NOT NULL `user_id`
    /// column.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref().is_some_and(|c| c.starts_with("23"))
        )
    }
}
