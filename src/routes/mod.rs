use axum::http::HeaderValue;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

pub mod companies;
pub mod events;
pub mod extract;
pub mod health;
pub mod rooms;
pub mod users;

pub fn create_router(state: AppState) -> Router<()> {
    let allow_origin = match state.config.cors_allowed_origin.as_ref() {
        Some(origins) => AllowOrigin::list(parse_origins(origins)),
        None => AllowOrigin::mirror_request(),
    };
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let admin_routes = Router::new()
        .route("/companies", post(companies::create_company))
        .route("/companies/:company_id/users", post(users::create_user))
        .route("/companies/:company_id/events", post(events::create_event))
        .route("/events/:event_id/rooms", post(rooms::configure_rooms));

    Router::new()
        .nest("/admin", admin_routes)
        .route("/health", get(health::health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .filter_map(|value| match value.parse::<HeaderValue>() {
            Ok(header) => Some(header),
            Err(err) => {
                tracing::warn!(origin = value, error = %err, "ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}
