use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use validator::Validate;

use super::extract::{AppJson, AppPath};
use crate::error::AppResult;
use crate::models::User;
use crate::services::{CreateUser, UserService};
use crate::state::AppState;

/// `role` stays a free string here: membership in the role set is a
/// business rule answered with 400, not a schema failure.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 2, max = 200))]
    pub name: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    pub role: String,
}

pub async fn create_user(
    State(state): State<AppState>,
    AppPath(company_id): AppPath<i32>,
    AppJson(payload): AppJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<User>)> {
    payload.validate()?;

    let mut conn = state.db()?;
    let user = UserService::new(&mut *conn).create_user(
        company_id,
        CreateUser {
            name: payload.name,
            email: payload.email,
            role: payload.role,
        },
    )?;

    Ok((StatusCode::CREATED, Json(user)))
}
