//! Per-entity data access.
//!
//! Every repository trait is implemented for [`diesel::PgConnection`], so a
//! pooled connection checked out for one request is the only handle a
//! service ever needs. Constraint violations reported by the store are
//! surfaced as distinct [`StoreError`] variants so services can translate
//! them into domain errors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

pub mod company;
pub mod event;
#[cfg(test)]
pub mod memory;
pub mod room;
pub mod user;

pub use company::CompanyRepository;
pub use event::EventRepository;
pub use room::RoomRepository;
pub use user::UserRepository;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint violated: {}", constraint_label(.constraint))]
    UniqueViolation { constraint: Option<String> },
    #[error("foreign key constraint violated: {}", constraint_label(.constraint))]
    ForeignKeyViolation { constraint: Option<String> },
    #[error("check constraint violated: {}", constraint_label(.constraint))]
    CheckViolation { constraint: Option<String> },
    #[error("database error: {0}")]
    Database(DieselError),
}

pub type StoreResult<T> = Result<T, StoreError>;

fn constraint_label(constraint: &Option<String>) -> &str {
    constraint.as_deref().unwrap_or("unknown")
}

impl From<DieselError> for StoreError {
    fn from(value: DieselError) -> Self {
        match value {
            DieselError::DatabaseError(kind, info) => {
                let constraint = info.constraint_name().map(str::to_owned);
                match kind {
                    DatabaseErrorKind::UniqueViolation => StoreError::UniqueViolation { constraint },
                    DatabaseErrorKind::ForeignKeyViolation => {
                        StoreError::ForeignKeyViolation { constraint }
                    }
                    DatabaseErrorKind::CheckViolation => StoreError::CheckViolation { constraint },
                    _ => StoreError::Database(DieselError::DatabaseError(kind, info)),
                }
            }
            other => StoreError::Database(other),
        }
    }
}
