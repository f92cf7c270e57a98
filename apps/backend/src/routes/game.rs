//! Round endpoints.

use actix_web::{web, HttpResponse};
use tracing::info;

use crate::error::AppError;
use crate::extractors::validated_json::ValidatedJson;
use crate::protocol::game_state::{
    FetchWordResponse, GameStateResponse, PlayerScore, ScoresResponse, SubmitScoreRequest,
    SubmitScoreResponse,
};
use crate::state::app_state::AppState;

/// GET /game-state
///
/// Active rounds report the word and deadlines; otherwise the wait until
/// the next round. The very first call starts a round if none exists.
async fn game_state(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let rounds = &app_state.rounds;
    let now = rounds.now();
    let status = rounds.query_state(now);
    Ok(HttpResponse::Ok().json(GameStateResponse::from_status(status, now)))
}

/// GET /fetch-word
///
/// Serves the current word even after the round has ended.
async fn fetch_word(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let rounds = &app_state.rounds;
    let now = rounds.now();
    let view = rounds.fetch_word(now)?;
    Ok(HttpResponse::Ok().json(FetchWordResponse::new(view, now)))
}

/// GET /get_scores
async fn get_scores(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let rounds = &app_state.rounds;
    let scores = rounds.get_scores(rounds.now())?;
    Ok(HttpResponse::Ok().json(ScoresResponse {
        scores: scores.into_iter().map(PlayerScore::from).collect(),
    }))
}

/// POST /submit-score
async fn submit_score(
    app_state: web::Data<AppState>,
    body: ValidatedJson<SubmitScoreRequest>,
) -> Result<HttpResponse, AppError> {
    let SubmitScoreRequest {
        player_name,
        score,
        word,
    } = body.into_inner();

    let rounds = &app_state.rounds;
    rounds.submit_score(rounds.now(), player_name.clone(), score, &word)?;
    info!(player = %player_name, score, "Score submitted");

    Ok(HttpResponse::Ok().json(SubmitScoreResponse {
        status: "Score submitted successfully".to_string(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/game-state", web::get().to(game_state))
        .route("/fetch-word", web::get().to(fetch_word))
        .route("/get_scores", web::get().to(get_scores))
        .route("/submit-score", web::post().to(submit_score));
}
