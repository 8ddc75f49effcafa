//! Liveness handler

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct WelcomeResponse {
    message: &'static str,
}

pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Oracle Enterprise Intelligence Platform API",
    })
}
