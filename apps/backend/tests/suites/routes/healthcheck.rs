use actix_web::test;
use serde_json::json;

use crate::common::json_body;
use crate::support::{create_test_app, test_game};

#[actix_web::test]
async fn test_root_says_hello() {
    let game = test_game(&["python"]);
    let app = create_test_app(game.state.clone()).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let body = json_body(test::call_service(&app, req).await, 200).await;

    assert_eq!(body, json!({"message": "Hello"}));
}

#[actix_web::test]
async fn test_health_reports_round_number() {
    let game = test_game(&["python"]);
    game.start_round();
    let app = create_test_app(game.state.clone()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body = json_body(test::call_service(&app, req).await, 200).await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["round_number"], 1);
    assert_eq!(body["time"], "2024-05-01T12:00:00Z");
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));
}
