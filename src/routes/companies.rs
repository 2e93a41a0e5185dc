use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use validator::Validate;

use super::extract::AppJson;
use crate::error::AppResult;
use crate::models::Company;
use crate::services::CompanyService;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompanyRequest {
    #[validate(length(min = 2, max = 200))]
    pub name: String,
}

pub async fn create_company(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCompanyRequest>,
) -> AppResult<(StatusCode, Json<Company>)> {
    payload.validate()?;

    let mut conn = state.db()?;
    let company = CompanyService::new(&mut *conn).create_company(&payload.name)?;

    Ok((StatusCode::CREATED, Json(company)))
}
