// src/presentation/http/controllers/time.rs
use crate::application::dto::TimestampDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/time",
    responses(
        (status = 200, description = "Latest published timestamp.", body = TimestampDto),
        (status = 404, description = "No timestamp has been published, or it was evicted.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "The stored record is not a valid epoch.", body = crate::presentation::http::error::ErrorResponse),
        (status = 503, description = "The shared store is unreachable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Time"
)]
pub async fn get_time(Extension(state): Extension<HttpState>) -> HttpResult<Json<TimestampDto>> {
    let snapshot = state
        .services
        .timestamp_queries
        .current_time()
        .await
        .into_http()?;
    Ok(Json(snapshot))
}
