use axum::{extract::State, http::StatusCode, Json};
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use super::extract::{AppJson, AppPath};
use crate::error::AppResult;
use crate::models::{Event, DEFAULT_TIMEZONE};
use crate::services::{CreateEvent, EventService};
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 2, max = 200))]
    pub name: String,
    #[validate(length(min = 2, max = 120))]
    pub location_city: String,
    #[validate(length(min = 2, max = 120))]
    pub location_country: String,
    #[serde(default = "default_timezone")]
    #[validate(length(min = 2, max = 64))]
    pub timezone: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

pub async fn create_event(
    State(state): State<AppState>,
    AppPath(company_id): AppPath<i32>,
    AppJson(payload): AppJson<CreateEventRequest>,
) -> AppResult<(StatusCode, Json<Event>)> {
    payload.validate()?;

    let mut conn = state.db()?;
    let event = EventService::new(&mut *conn).create_event(
        company_id,
        CreateEvent {
            name: payload.name,
            location_city: payload.location_city,
            location_country: payload.location_country,
            timezone: payload.timezone,
            start_date: payload.start_date,
            end_date: payload.end_date,
        },
    )?;

    Ok((StatusCode::CREATED, Json(event)))
}
