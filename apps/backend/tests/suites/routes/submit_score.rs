use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use serde_json::json;

use crate::common::json_body;
use crate::support::{create_test_app, test_game};

fn submit(body: serde_json::Value) -> actix_http::Request {
    test::TestRequest::post()
        .uri("/submit-score")
        .set_json(body)
        .to_request()
}

#[actix_web::test]
async fn test_reference_scenario_over_http() {
    let game = test_game(&["python"]);
    game.start_round();
    let app = create_test_app(game.state.clone()).await;

    game.at(10);
    let resp = test::call_service(
        &app,
        submit(json!({"player_name": "alice", "score": 10, "word": "python"})),
    )
    .await;
    assert_eq!(
        json_body(resp, 200).await,
        json!({"status": "Score submitted successfully"})
    );

    game.at(5);
    let resp = test::call_service(
        &app,
        submit(json!({"player_name": "bob", "score": 5, "word": "java"})),
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "WORD_MISMATCH",
        StatusCode::BAD_REQUEST,
        Some("Submitted word does not match the current round's word."),
    )
    .await;

    game.at(93);
    let resp = test::call_service(
        &app,
        submit(json!({"player_name": "alice", "score": 10, "word": "python"})),
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "SUBMISSION_CLOSED",
        StatusCode::BAD_REQUEST,
        Some("Score submission period has ended."),
    )
    .await;

    game.at(94);
    let req = test::TestRequest::get().uri("/get_scores").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    game.at(96);
    let req = test::TestRequest::get().uri("/get_scores").to_request();
    let body = json_body(test::call_service(&app, req).await, 200).await;
    assert_eq!(body, json!({"scores": [{"player": "alice", "score": 10}]}));
}

#[actix_web::test]
async fn test_malformed_body_is_bad_request() {
    let game = test_game(&["python"]);
    game.start_round();
    let app = create_test_app(game.state.clone()).await;

    let req = test::TestRequest::post()
        .uri("/submit-score")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"player_name": "alice", "score": "ten", "word": "python"}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
        Some("wrong types"),
    )
    .await;
    game.at(95);
    let rounds = &game.state.rounds;
    assert_eq!(rounds.get_scores(rounds.now()), Ok(Vec::new()));
}

#[actix_web::test]
async fn test_missing_field_is_bad_request() {
    let game = test_game(&["python"]);
    game.start_round();
    let app = create_test_app(game.state.clone()).await;

    let resp = test::call_service(&app, submit(json!({"player_name": "alice", "score": 1}))).await;

    assert_problem_details_from_service_response(
        resp,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}

#[actix_web::test]
async fn test_oversized_body_is_rejected() {
    let game = test_game(&["python"]);
    game.start_round();
    let app = create_test_app(game.state.clone()).await;

    let huge_name = "x".repeat(20 * 1024);
    let resp = test::call_service(
        &app,
        submit(json!({"player_name": huge_name, "score": 1, "word": "python"})),
    )
    .await;

    assert_problem_details_from_service_response(
        resp,
        "PAYLOAD_TOO_LARGE",
        StatusCode::PAYLOAD_TOO_LARGE,
        None,
    )
    .await;
}

#[actix_web::test]
async fn test_submit_before_any_round_is_closed() {
    // Before the first round the deadline sits in the past.
    let game = test_game(&["python"]);
    let app = create_test_app(game.state.clone()).await;

    let resp = test::call_service(
        &app,
        submit(json!({"player_name": "alice", "score": 1, "word": "python"})),
    )
    .await;

    assert_problem_details_from_service_response(
        resp,
        "SUBMISSION_CLOSED",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}
