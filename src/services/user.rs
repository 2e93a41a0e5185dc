use crate::models::{NewUser, User, UserRole};
use crate::repositories::{CompanyRepository, StoreError, UserRepository};

use super::{ServiceError, ServiceResult};

#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub role: String,
}

pub struct UserService<'a, S> {
    store: &'a mut S,
}

impl<'a, S: CompanyRepository + UserRepository> UserService<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Adds an active user to a company.
    ///
    /// Checks run in order: the company must exist, the role must be one of
    /// `admin`, `organizer`, `attendee`, and the email must be unused within
    /// that company. The domain part of the email is compared and stored in
    /// lowercase; the local part is kept as given.
    pub fn create_user(&mut self, company_id: i32, input: CreateUser) -> ServiceResult<User> {
        if self.store.find_company(company_id)?.is_none() {
            return Err(company_not_found());
        }

        let role: UserRole = input.role.parse().map_err(|role| {
            let allowed: Vec<&str> = UserRole::ALL.iter().map(|r| r.as_str()).collect();
            ServiceError::Validation(format!(
                "Invalid role '{role}'. Must be one of {}.",
                allowed.join(", ")
            ))
        })?;

        let email = normalize_email(&input.email);
        if self
            .store
            .find_user_by_email(company_id, &email)?
            .is_some()
        {
            tracing::debug!(company_id, "rejected duplicate user email");
            return Err(duplicate_email());
        }

        let new_user = NewUser {
            company_id,
            name: input.name,
            email,
            role: role.as_str().to_string(),
            active: true,
        };

        let user = self
            .store
            .insert_user(&new_user)
            .map_err(|err| match err {
                StoreError::UniqueViolation { .. } => duplicate_email(),
                StoreError::ForeignKeyViolation { .. } => company_not_found(),
                other => ServiceError::from(other),
            })?;

        tracing::info!(
            company_id,
            user_id = user.id,
            role = %role,
            "created user"
        );
        Ok(user)
    }
}

/// Lowercases everything after the last `@`.
fn normalize_email(email: &str) -> String {
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => email.to_string(),
    }
}

fn company_not_found() -> ServiceError {
    ServiceError::NotFound("Company not found.".to_string())
}

fn duplicate_email() -> ServiceError {
    ServiceError::Conflict("A user with this email already exists in this company.".to_string())
}
