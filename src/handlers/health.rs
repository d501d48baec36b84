use axum::{Json, response::IntoResponse};

use crate::models::Envelope;

pub async fn health_check() -> impl IntoResponse {
    Json(Envelope::success_empty())
}
