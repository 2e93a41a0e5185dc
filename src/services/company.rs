use crate::models::{Company, NewCompany};
use crate::repositories::{CompanyRepository, StoreError};

use super::{ServiceError, ServiceResult};

pub struct CompanyService<'a, S> {
    store: &'a mut S,
}

impl<'a, S: CompanyRepository> CompanyService<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Registers a new tenant. Company names are unique system-wide.
    pub fn create_company(&mut self, name: &str) -> ServiceResult<Company> {
        if self.store.find_company_by_name(name)?.is_some() {
            tracing::debug!(name, "rejected duplicate company name");
            return Err(duplicate_name(name));
        }

        let company = self
            .store
            .insert_company(&NewCompany {
                name: name.to_string(),
            })
            .map_err(|err| match err {
                StoreError::UniqueViolation { .. } => duplicate_name(name),
                other => ServiceError::from(other),
            })?;

        tracing::info!(company_id = company.id, name = %company.name, "created company");
        Ok(company)
    }
}

fn duplicate_name(name: &str) -> ServiceError {
    ServiceError::Conflict(format!("Company '{name}' already exists."))
}
