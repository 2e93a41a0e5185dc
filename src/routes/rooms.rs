use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use validator::Validate;

use super::extract::{AppJson, AppPath};
use crate::error::{AppError, AppResult};
use crate::models::EventRoom;
use crate::services::RoomService;
use crate::state::AppState;

const MAX_LOCATION_LEN: usize = 255;

#[derive(Debug, Deserialize, Validate)]
pub struct ConfigureRoomsRequest {
    #[validate(range(min = 1, max = 20))]
    pub room_count: u32,
    /// When present, must hold one entry per numbered room.
    #[serde(default)]
    pub default_locations: Option<Vec<String>>,
}

impl ConfigureRoomsRequest {
    fn check(&self) -> AppResult<()> {
        self.validate()?;
        let too_long = self
            .default_locations
            .iter()
            .flatten()
            .any(|location| location.chars().count() > MAX_LOCATION_LEN);
        if too_long {
            return Err(AppError::invalid_request(
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("default_locations entries must be at most {MAX_LOCATION_LEN} characters"),
            ));
        }
        Ok(())
    }
}

pub async fn configure_rooms(
    State(state): State<AppState>,
    AppPath(event_id): AppPath<i32>,
    AppJson(payload): AppJson<ConfigureRoomsRequest>,
) -> AppResult<(StatusCode, Json<Vec<EventRoom>>)> {
    payload.check()?;

    let mut conn = state.db()?;
    let rooms = RoomService::new(&mut *conn).configure_rooms(
        event_id,
        payload.room_count as usize,
        payload.default_locations,
    )?;

    Ok((StatusCode::CREATED, Json(rooms)))
}
