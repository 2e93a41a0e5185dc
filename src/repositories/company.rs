use diesel::{prelude::*, PgConnection};

use super::StoreResult;
use crate::models::{Company, NewCompany};
use crate::schema::companies;

pub trait CompanyRepository {
    fn find_company(&mut self, company_id: i32) -> StoreResult<Option<Company>>;
    fn find_company_by_name(&mut self, name: &str) -> StoreResult<Option<Company>>;
    fn insert_company(&mut self, company: &NewCompany) -> StoreResult<Company>;
}

impl CompanyRepository for PgConnection {
    fn find_company(&mut self, company_id: i32) -> StoreResult<Option<Company>> {
        let company = companies::table
            .find(company_id)
            .select(Company::as_select())
            .first(self)
            .optional()?;
        Ok(company)
    }

    fn find_company_by_name(&mut self, name: &str) -> StoreResult<Option<Company>> {
        let company = companies::table
            .filter(companies::name.eq(name))
            .select(Company::as_select())
            .first(self)
            .optional()?;
        Ok(company)
    }

    fn insert_company(&mut self, company: &NewCompany) -> StoreResult<Company> {
        let created = diesel::insert_into(companies::table)
            .values(company)
            .returning(Company::as_returning())
            .get_result(self)?;
        Ok(created)
    }
}
