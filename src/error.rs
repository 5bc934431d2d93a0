//! Error taxonomy for the member repository.
//!
//! Store and connection failures are propagated unchanged. A missing row is its
//! own variant so callers can branch on absence without inspecting store codes.
//! Failures while releasing resources never show up here; they are only logged.

use thiserror::Error;

/// Errors returned by [`crate::ConnectionProvider`] and [`crate::MemberRepository`].
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The data store could not be opened (bad location, unreachable, rejected).
    #[error("failed to connect to {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Statement preparation or execution failed (bad SQL, constraint violation, decode).
    #[error("db error: {0}")]
    Store(#[from] rusqlite::Error),

    /// `find_by_id` matched no row.
    #[error("member not found memberId={member_id}")]
    NotFound { member_id: String },
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }

    /// True when the store rejected a statement on a constraint (e.g. duplicate primary key).
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            RepositoryError::Store(rusqlite::Error::SqliteFailure(err, _)) => {
                err.code == rusqlite::ErrorCode::ConstraintViolation
            }
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = RepositoryError::NotFound {
            member_id: "memberA".to_string(),
        };

        assert!(err.is_not_found());
        assert!(!err.is_constraint_violation());
        assert_eq!(err.to_string(), "member not found memberId=memberA");
    }

    #[test]
    fn test_constraint_violation_detection() {
        let failure = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY),
            Some("UNIQUE constraint failed: member.member_id".to_string()),
        );
        let err = RepositoryError::from(failure);

        assert!(err.is_constraint_violation());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_other_store_errors_are_not_constraint_violations() {
        let err = RepositoryError::from(rusqlite::Error::QueryReturnedNoRows);

        assert!(!err.is_constraint_violation());
        assert!(!err.is_not_found());
    }
}
