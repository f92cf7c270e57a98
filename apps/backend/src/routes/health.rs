use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;
use crate::protocol::game_state::{utc_timestamp, MessageResponse};
use crate::state::app_state::AppState;

/// GET /
pub async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Hello".to_string(),
    }))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    round_number: u64,
    time: String,
}

/// GET /health
async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let rounds = &app_state.rounds;
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
        round_number: rounds.rounds_started(),
        time: utc_timestamp(rounds.now()),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health));
}
