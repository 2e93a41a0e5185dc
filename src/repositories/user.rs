use diesel::{prelude::*, PgConnection};

use super::StoreResult;
use crate::models::{NewUser, User};
use crate::schema::users;

pub trait UserRepository {
    fn find_user(&mut self, user_id: i32) -> StoreResult<Option<User>>;
    /// Emails are scoped to a company; the same address may exist elsewhere.
    fn find_user_by_email(&mut self, company_id: i32, email: &str) -> StoreResult<Option<User>>;
    fn insert_user(&mut self, user: &NewUser) -> StoreResult<User>;
}

impl UserRepository for PgConnection {
    fn find_user(&mut self, user_id: i32) -> StoreResult<Option<User>> {
        let user = users::table
            .find(user_id)
            .select(User::as_select())
            .first(self)
            .optional()?;
        Ok(user)
    }

    fn find_user_by_email(&mut self, company_id: i32, email: &str) -> StoreResult<Option<User>> {
        let user = users::table
            .filter(users::company_id.eq(company_id))
            .filter(users::email.eq(email))
            .select(User::as_select())
            .first(self)
            .optional()?;
        Ok(user)
    }

    fn insert_user(&mut self, user: &NewUser) -> StoreResult<User> {
        let created = diesel::insert_into(users::table)
            .values(user)
            .returning(User::as_returning())
            .get_result(self)?;
        Ok(created)
    }
}
