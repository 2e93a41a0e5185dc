//! Business rules for the admin API.
//!
//! Services are request-scoped: each one borrows the store handle of the
//! current request and keeps no other state. Pre-checks give precise errors
//! in the common case; constraint violations raised by the store on insert
//! are translated into the same error kinds, since the pre-checks can race
//! with concurrent requests.

use thiserror::Error;

use crate::repositories::StoreError;

pub mod company;
pub mod event;
pub mod room;
pub mod user;

pub use company::CompanyService;
pub use event::{CreateEvent, EventService};
pub use room::RoomService;
pub use user::{CreateUser, UserService};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
